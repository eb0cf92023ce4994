//! Server run loop
//!
//! Reads requests from the transport, handles them one at a time, and
//! writes responses back in order. An undecodable input unit is logged and
//! skipped; end of input shuts the server down cleanly.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{info, warn};

use stockmcp_core::{Config, Result};

use crate::handler::RequestHandler;
use crate::protocol::JsonRpcRequest;
use crate::server::StockMcpServer;
use crate::transport::{StdioTransport, TransportError};

/// Drives the request/response loop over a transport
pub struct ServerRunner {
    server: Arc<StockMcpServer>,
    handler: RequestHandler,
}

impl ServerRunner {
    /// Create a runner with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let server = Arc::new(StockMcpServer::new(config)?);
        let handler = RequestHandler::new(server.clone());
        Ok(Self { server, handler })
    }

    /// Get a reference to the underlying server
    pub fn server(&self) -> &StockMcpServer {
        &self.server
    }

    /// Run over the process's stdin/stdout until EOF
    pub async fn run(self) -> std::result::Result<(), anyhow::Error> {
        self.run_with(StdioTransport::new()).await?;
        Ok(())
    }

    /// Run the loop over an arbitrary transport.
    ///
    /// Requests are processed strictly one at a time: the next read does
    /// not happen until the previous response, outbound HTTP included, has
    /// been written.
    pub async fn run_with<R, W>(
        self,
        mut transport: StdioTransport<R, W>,
    ) -> std::result::Result<StdioTransport<R, W>, anyhow::Error>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("server ready, waiting for requests");

        loop {
            match transport.read_message::<JsonRpcRequest>().await {
                Ok(Some(request)) => {
                    let response = self.handler.handle(request).await;
                    transport.write_message(&response).await?;
                }
                Ok(None) => break,
                Err(TransportError::Json(err)) => {
                    // Malformed input must not take the loop down
                    warn!("skipping undecodable request: {}", err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        info!("input stream closed, shutting down");
        Ok(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_creation() {
        let runner = ServerRunner::new(Config::default());
        assert!(runner.is_ok());
    }

    #[test]
    fn test_runner_exposes_server() {
        let runner = ServerRunner::new(Config::default()).unwrap();
        assert_eq!(runner.server().list_tools().len(), 1);
    }
}
