//! stockmcp - stock quote MCP server
//!
//! Serves the get_stock_price tool over JSON-RPC on stdin/stdout.

use tracing_subscriber::EnvFilter;

use stockmcp_core::Config;
use stockmcp_server::ServerRunner;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // Logging goes to stderr so it doesn't interfere with protocol stdio
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting stockmcp server v{}", VERSION);

    let runner = ServerRunner::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to create server: {}", e))?;

    tracing::info!("Available tools:");
    for tool in runner.server().list_tools() {
        tracing::info!("  - {}: {}", tool.name, tool.description);
    }

    runner.run().await?;

    tracing::info!("stockmcp server shutdown complete.");
    Ok(())
}
