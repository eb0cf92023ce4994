//! Shared quote data types

use serde::{Deserialize, Serialize};

/// A stock quote derived from one provider response.
///
/// Transient: exists only for the duration of a single tools/call exchange.
/// Numeric fields the provider omitted are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Uppercased ticker symbol, e.g. "AAPL"
    pub symbol: String,
    /// Current market price
    pub price: f64,
    /// Previous session close
    pub previous_close: f64,
    pub day_high: f64,
    pub day_low: f64,
    pub volume: f64,
}

impl Quote {
    /// Absolute change against the previous close
    pub fn change(&self) -> f64 {
        self.price - self.previous_close
    }

    /// Percent change against the previous close.
    ///
    /// A zero previous close reports 0.0 rather than dividing by zero.
    pub fn change_percent(&self) -> f64 {
        if self.previous_close != 0.0 {
            (self.change() / self.previous_close) * 100.0
        } else {
            0.0
        }
    }

    /// Whether the quote carries a usable current price.
    ///
    /// A price of exactly zero is treated as "data absent", the same as the
    /// provider returning nothing for the symbol.
    pub fn has_price(&self) -> bool {
        self.price != 0.0
    }
}
