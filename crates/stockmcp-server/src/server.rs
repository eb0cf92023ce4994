//! Main server implementation

use serde_json::{json, Value};
use tracing::debug;

use stockmcp_core::{Config, Result};
use stockmcp_quotes::QuoteFetcher;

use crate::protocol::RpcError;

/// The single tool this server exposes
pub const STOCK_PRICE_TOOL: &str = "get_stock_price";

/// Server identity reported from initialize
pub const SERVER_NAME: &str = "stockmcp";

/// A tool catalog entry
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Stock quote MCP server.
///
/// Holds no per-request state: only the loaded configuration and the
/// shared HTTP client inside the fetcher.
pub struct StockMcpServer {
    pub config: Config,
    fetcher: QuoteFetcher,
}

impl StockMcpServer {
    /// Create a new server instance
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = QuoteFetcher::new(&config.provider)?;
        Ok(Self { config, fetcher })
    }

    /// Server identity: name and version
    pub fn server_info() -> (&'static str, &'static str) {
        (SERVER_NAME, env!("CARGO_PKG_VERSION"))
    }

    /// List available tools
    pub fn list_tools(&self) -> Vec<ToolSpec> {
        vec![ToolSpec {
            name: STOCK_PRICE_TOOL,
            description:
                "Get current stock price and basic info for a company using Yahoo Finance",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "symbol": {
                        "type": "string",
                        "description": "Stock symbol (e.g., AAPL, GOOGL, MSFT, TSLA)"
                    }
                },
                "required": ["symbol"]
            }),
        }]
    }

    /// Call a tool by name
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: &Value,
    ) -> std::result::Result<String, RpcError> {
        match name {
            STOCK_PRICE_TOOL => self.get_stock_price(arguments).await,
            _ => Err(RpcError::invalid_params_with_message("Unknown tool")),
        }
    }

    /// Validate the symbol argument and fetch a quote for it
    async fn get_stock_price(&self, arguments: &Value) -> std::result::Result<String, RpcError> {
        let symbol = normalize_symbol(arguments)?;
        debug!(%symbol, "fetching quote");

        self.fetcher
            .fetch(&symbol)
            .await
            .map_err(|e| RpcError::internal_error_with_message(e.to_string()))
    }
}

/// Extract and uppercase the symbol argument.
///
/// The three failure modes each report their own invalid-params message.
fn normalize_symbol(arguments: &Value) -> std::result::Result<String, RpcError> {
    let symbol = match arguments.get("symbol") {
        None => {
            return Err(RpcError::invalid_params_with_message(
                "Missing symbol parameter",
            ))
        }
        Some(value) => value
            .as_str()
            .ok_or_else(|| RpcError::invalid_params_with_message("Symbol must be a string"))?,
    };

    if symbol.is_empty() {
        return Err(RpcError::invalid_params_with_message(
            "Symbol cannot be empty",
        ));
    }

    Ok(symbol.to_uppercase())
}
