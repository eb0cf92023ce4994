//! StockMCP Quotes - provider access and quote rendering
//!
//! This crate talks to the public Yahoo Finance endpoints, classifies the
//! two response shapes the provider is known to return, and renders the
//! extracted quote as display text.

pub mod format;
pub mod provider;
pub mod shape;

pub use format::render_quote;
pub use provider::{Endpoint, QuoteFetcher};
pub use shape::{quote_from_body, ProviderPayload};
