//! Lending endpoints
//!
//! These endpoints require authentication.

use poloniex_auth::Params;
use rust_decimal::Decimal;

use super::TradingClient;
use crate::http::ApiFuture;

impl TradingClient {
    /// Create a loan offer
    ///
    /// `duration` is in days.
    pub fn create_loan_offer(
        &self,
        currency: &str,
        amount: Decimal,
        duration: u32,
        auto_renew: bool,
        lending_rate: Decimal,
    ) -> ApiFuture {
        self.command(
            "createLoanOffer",
            Params::new()
                .with("currency", currency)
                .with("amount", amount)
                .with("duration", duration)
                .with("autoRenew", auto_renew)
                .with("lendingRate", lending_rate),
        )
    }

    /// Cancel a loan offer
    pub fn cancel_loan_offer(&self, order_number: u64) -> ApiFuture {
        self.command(
            "cancelLoanOffer",
            Params::new().with("orderNumber", order_number),
        )
    }

    /// Open loan offers for each currency
    pub fn return_open_loan_offers(&self) -> ApiFuture {
        self.command("returnOpenLoanOffers", Params::new())
    }

    /// Active loans for each currency
    pub fn return_active_loans(&self) -> ApiFuture {
        self.command("returnActiveLoans", Params::new())
    }

    /// Lending history between `start` and `end` (UNIX seconds)
    pub fn return_lending_history(&self, start: u64, end: u64, limit: Option<u32>) -> ApiFuture {
        self.command(
            "returnLendingHistory",
            Params::new()
                .with("start", start)
                .with("end", end)
                .with_opt("limit", limit),
        )
    }

    /// Toggle auto-renew on an active loan
    pub fn toggle_auto_renew(&self, order_number: u64) -> ApiFuture {
        self.command(
            "toggleAutoRenew",
            Params::new().with("orderNumber", order_number),
        )
    }
}
