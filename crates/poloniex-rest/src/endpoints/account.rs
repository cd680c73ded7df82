//! Account, wallet and fee endpoints
//!
//! These endpoints require authentication.

use poloniex_auth::Params;
use rust_decimal::Decimal;

use super::TradingClient;
use crate::http::ApiFuture;
use crate::types::Account;

impl TradingClient {
    /// Available balances
    pub fn return_balances(&self) -> ApiFuture {
        self.command("returnBalances", Params::new())
    }

    /// Available, on-order and estimated BTC value of each balance
    ///
    /// Limited to the exchange account unless `include_all_accounts` is set,
    /// in which case margin and lending balances are included.
    pub fn return_complete_balances(&self, include_all_accounts: bool) -> ApiFuture {
        let params = Params::new().with_opt("account", include_all_accounts.then_some("all"));
        self.command("returnCompleteBalances", params)
    }

    /// All deposit addresses
    pub fn return_deposit_addresses(&self) -> ApiFuture {
        self.command("returnDepositAddresses", Params::new())
    }

    /// Generate a new deposit address for `currency`
    pub fn generate_new_address(&self, currency: &str) -> ApiFuture {
        self.command("generateNewAddress", Params::new().with("currency", currency))
    }

    /// Deposit and withdrawal history between `start` and `end` (UNIX seconds)
    pub fn return_deposits_withdrawals(&self, start: u64, end: u64) -> ApiFuture {
        self.command(
            "returnDepositsWithdrawals",
            Params::new().with("start", start).with("end", end),
        )
    }

    /// Withdraw immediately, without email confirmation
    ///
    /// Requires the withdrawal privilege on the API key. `payment_id` is only
    /// meaningful for currencies that use one (e.g. XMR).
    pub fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> ApiFuture {
        self.command(
            "withdraw",
            Params::new()
                .with("currency", currency)
                .with("amount", amount)
                .with("address", address)
                .with_opt("paymentId", payment_id),
        )
    }

    /// Current maker/taker fees and trailing 30-day volume
    pub fn return_fee_info(&self) -> ApiFuture {
        self.command("returnFeeInfo", Params::new())
    }

    /// Balances sorted by account, optionally for a single account
    pub fn return_available_account_balances(&self, account: Option<Account>) -> ApiFuture {
        self.command(
            "returnAvailableAccountBalances",
            Params::new().with_opt("account", account),
        )
    }

    /// Tradable balances per currency for each margin-enabled market
    pub fn return_tradable_balances(&self) -> ApiFuture {
        self.command("returnTradableBalances", Params::new())
    }

    /// Move funds between accounts
    pub fn transfer_balance(
        &self,
        currency: &str,
        amount: Decimal,
        from_account: Account,
        to_account: Account,
    ) -> ApiFuture {
        self.command(
            "transferBalance",
            Params::new()
                .with("currency", currency)
                .with("amount", amount)
                .with("fromAccount", from_account)
                .with("toAccount", to_account),
        )
    }
}
