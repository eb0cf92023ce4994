//! JSON-RPC 2.0 protocol types
//!
//! Message structures, error codes, and the supported method names.

pub mod errors;
pub mod messages;
pub mod methods;

pub use errors::{ErrorCode, RpcError};
pub use messages::{JsonRpcRequest, JsonRpcResponse, RequestId};
pub use methods::{Method, MCP_VERSION};
