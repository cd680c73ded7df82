//! Request option types for the Poloniex REST API
//!
//! Responses are not modeled here: every endpoint returns the decoded JSON
//! body as a [`serde_json::Value`].

use poloniex_auth::ParamValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::RestError;

/// Currency pair sentinel accepted by order book, open orders and margin position queries
pub const ALL_MARKETS: &str = "all";

// ============================================================================
// Market Data
// ============================================================================

/// Candlestick period for `returnChartData`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ChartPeriod {
    /// 5 minutes
    M5,
    /// 15 minutes
    M15,
    /// 30 minutes
    M30,
    /// 2 hours
    H2,
    /// 4 hours
    H4,
    /// 1 day
    D1,
}

impl ChartPeriod {
    /// All supported periods, shortest first
    pub const ALL: [ChartPeriod; 6] = [
        Self::M5,
        Self::M15,
        Self::M30,
        Self::H2,
        Self::H4,
        Self::D1,
    ];

    /// Period length in seconds
    pub fn as_secs(self) -> u32 {
        match self {
            Self::M5 => 300,
            Self::M15 => 900,
            Self::M30 => 1800,
            Self::H2 => 7200,
            Self::H4 => 14400,
            Self::D1 => 86400,
        }
    }
}

impl TryFrom<u32> for ChartPeriod {
    type Error = RestError;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_secs() == secs)
            .ok_or_else(|| RestError::InvalidParameter(format!("unsupported chart period: {}s", secs)))
    }
}

impl From<ChartPeriod> for u32 {
    fn from(period: ChartPeriod) -> Self {
        period.as_secs()
    }
}

impl From<ChartPeriod> for ParamValue {
    fn from(period: ChartPeriod) -> Self {
        ParamValue::from(period.as_secs())
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_secs())
    }
}

// ============================================================================
// Accounts
// ============================================================================

/// Wallet account for balance queries and transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Account {
    /// Spot exchange account
    Exchange,
    /// Margin trading account
    Margin,
    /// Lending account
    Lending,
}

impl Account {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exchange => "exchange",
            Self::Margin => "margin",
            Self::Lending => "lending",
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Account> for ParamValue {
    fn from(account: Account) -> Self {
        ParamValue::from(account.as_str())
    }
}

// ============================================================================
// Orders
// ============================================================================

/// Execution flags for `buy` / `sell`
///
/// All three flags are always transmitted, as `1` or `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderOptions {
    /// Fill in its entirety or abort
    pub fill_or_kill: bool,
    /// Cancel whatever does not fill immediately
    pub immediate_or_cancel: bool,
    /// Only place if no portion fills immediately
    pub post_only: bool,
}

impl OrderOptions {
    /// Plain limit order
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fill-or-kill
    pub fn fill_or_kill(mut self) -> Self {
        self.fill_or_kill = true;
        self
    }

    /// Set immediate-or-cancel
    pub fn immediate_or_cancel(mut self) -> Self {
        self.immediate_or_cancel = true;
        self
    }

    /// Set post-only
    pub fn post_only(mut self) -> Self {
        self.post_only = true;
        self
    }
}

/// Optional parameters for `moveOrder`
///
/// Unset fields are omitted from the request. `post_only` and
/// `immediate_or_cancel` have no effect on margin orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOrderOptions {
    /// New amount; the original amount is kept when unset
    pub amount: Option<Decimal>,
    /// Post-only flag
    pub post_only: Option<bool>,
    /// Immediate-or-cancel flag
    pub immediate_or_cancel: Option<bool>,
}

impl MoveOrderOptions {
    /// Keep amount and flags
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set post-only
    pub fn with_post_only(mut self, post_only: bool) -> Self {
        self.post_only = Some(post_only);
        self
    }

    /// Set immediate-or-cancel
    pub fn with_immediate_or_cancel(mut self, immediate_or_cancel: bool) -> Self {
        self.immediate_or_cancel = Some(immediate_or_cancel);
        self
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Message of an exchange-reported error, if `value` is one
///
/// The exchange answers failed commands with a well-formed body such as
/// `{"error": "Invalid API key/secret pair."}`. Such bodies are returned as
/// successful results; this helper lets callers check for them.
pub fn exchange_error(value: &Value) -> Option<&str> {
    value.get("error").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chart_period_seconds() {
        let secs: Vec<u32> = ChartPeriod::ALL.iter().map(|p| p.as_secs()).collect();
        assert_eq!(secs, vec![300, 900, 1800, 7200, 14400, 86400]);
    }

    #[test]
    fn test_chart_period_try_from() {
        assert_eq!(ChartPeriod::try_from(7200).unwrap(), ChartPeriod::H2);
        assert!(ChartPeriod::try_from(3600).is_err());
    }

    #[test]
    fn test_chart_period_serde() {
        assert_eq!(serde_json::to_string(&ChartPeriod::D1).unwrap(), "86400");
        assert_eq!(serde_json::from_str::<ChartPeriod>("900").unwrap(), ChartPeriod::M15);
        assert!(serde_json::from_str::<ChartPeriod>("60").is_err());
    }

    #[test]
    fn test_account_wire_names() {
        assert_eq!(ParamValue::from(Account::Margin).to_string(), "margin");
        assert_eq!(serde_json::to_string(&Account::Lending).unwrap(), "\"lending\"");
    }

    #[test]
    fn test_order_options_builder() {
        let opts = OrderOptions::new().post_only();
        assert!(opts.post_only);
        assert!(!opts.fill_or_kill);
        assert!(!opts.immediate_or_cancel);
    }

    #[test]
    fn test_exchange_error_detection() {
        let err = json!({"error": "Invalid command."});
        assert_eq!(exchange_error(&err), Some("Invalid command."));

        let ok = json!({"BTC": "0.5"});
        assert_eq!(exchange_error(&ok), None);

        assert_eq!(exchange_error(&json!([1, 2, 3])), None);
    }
}
