//! Strictly increasing nonce generation
//!
//! Poloniex rejects any private request whose nonce is not greater than the
//! last one it accepted for the same key. Nonces are seeded from wall-clock
//! microseconds and bumped past the previous value whenever the clock has not
//! advanced (rapid successive requests, or the clock stepping backwards).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Per-client nonce source
///
/// Generation is a single compare-and-swap loop; it never blocks and never
/// awaits, so a nonce is fixed before the request that carries it is sent.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator whose first nonce is strictly greater than `floor`
    pub fn starting_after(floor: u64) -> Self {
        Self {
            last: AtomicU64::new(floor),
        }
    }

    /// Produce the next nonce
    pub fn generate(&self) -> u64 {
        let now = now_micros();
        let mut last = self.last.load(Ordering::Acquire);

        loop {
            let candidate = now.max(last.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }

    /// The most recently issued nonce, or the seed if none was issued yet
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Acquire)
    }
}

/// Microseconds since the UNIX epoch; a clock set before the epoch yields 0
fn now_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}
