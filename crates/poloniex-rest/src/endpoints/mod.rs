//! API endpoint implementations

pub mod public;
pub mod trading;
pub mod account;
pub mod margin;
pub mod lending;

pub use public::PublicClient;
pub use trading::TradingClient;
