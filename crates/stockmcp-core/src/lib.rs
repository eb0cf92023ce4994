//! StockMCP Core - Configuration, error types, and shared quote data
//!
//! This crate provides the foundational types used across the stockmcp
//! crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, ProviderConfig, ServerConfig};
pub use error::{Error, Result};
pub use types::Quote;
