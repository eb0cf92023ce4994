//! Error types for StockMCP

use thiserror::Error;

/// Main error type for StockMCP operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    /// Quote provider yielded no usable data for a symbol
    #[error("{0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Aggregate failure after every provider endpoint missed
    pub fn unable_to_fetch(symbol: &str) -> Self {
        Error::Provider(format!("Unable to fetch data for symbol: {}", symbol))
    }
}

/// Result type alias for StockMCP operations
pub type Result<T> = std::result::Result<T, Error>;
