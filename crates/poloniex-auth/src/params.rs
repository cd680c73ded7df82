//! Request parameter mapping
//!
//! Poloniex signs the exact form-encoded body it receives, so the order in
//! which parameters are rendered must be identical for the signature and the
//! transmitted body. [`Params`] keeps its entries in lexicographic key order
//! and produces a single encoded string that is used for both.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Free-form text (currency pairs, addresses, account names)
    Text(String),
    /// Signed integer
    Integer(i64),
    /// Unsigned integer (timestamps, order numbers, nonces)
    Unsigned(u64),
    /// Exact decimal (rates, amounts)
    Decimal(Decimal),
    /// Floating point
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Unsigned(n) => write!(f, "{}", n),
            Self::Decimal(d) => write!(f, "{}", d.normalize()),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Unsigned(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Flags are transmitted as `1` / `0`
impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Unsigned(u64::from(value))
    }
}

/// Ordered parameter mapping for a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add an entry only when a value is present
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Insert an entry when `value` is `Some`, otherwise leave the mapping untouched
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Look up an entry
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Form-encode the mapping as `k1=v1&k2=v2...` in key order
    pub fn encode(&self) -> AuthResult<String> {
        let pairs: Vec<(&str, String)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.to_string()))
            .collect();

        serde_urlencoded::to_string(&pairs).map_err(|e| AuthError::Encode(e.to_string()))
    }

    /// Parse a form-encoded string back into a mapping of text values
    pub fn decode(encoded: &str) -> AuthResult<Self> {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(encoded).map_err(|e| AuthError::Encode(e.to_string()))?;

        Ok(pairs.into_iter().fold(Self::new(), |params, (k, v)| params.with(k, v)))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |params, (k, v)| params.with(k, v))
    }
}
