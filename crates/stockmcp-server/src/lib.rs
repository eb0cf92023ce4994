//! StockMCP Server - JSON-RPC dispatch over stdio
//!
//! This crate implements the protocol surface: message types, method
//! routing, the stdio transport, and the run loop.

pub mod handler;
pub mod protocol;
pub mod runner;
pub mod server;
pub mod transport;

pub use handler::RequestHandler;
pub use runner::ServerRunner;
pub use server::StockMcpServer;
pub use transport::StdioTransport;
