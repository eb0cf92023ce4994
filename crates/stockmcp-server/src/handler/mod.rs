//! Request routing
//!
//! Maps incoming JSON-RPC requests to method handlers and wraps their
//! outcomes into responses. Contract: one decoded request in, exactly one
//! response out, errors included.

pub mod methods;

use std::sync::Arc;

use crate::protocol::{JsonRpcRequest, JsonRpcResponse, Method, RpcError};
use crate::server::StockMcpServer;

pub use methods::*;

/// Request handler for the three supported methods.
///
/// Carries no dispatch state of its own; every request is routed the same
/// way regardless of what came before it.
pub struct RequestHandler {
    server: Arc<StockMcpServer>,
}

impl RequestHandler {
    /// Create a new request handler backed by the given server
    pub fn new(server: Arc<StockMcpServer>) -> Self {
        Self { server }
    }

    /// Handle an incoming request and produce its response
    pub async fn handle(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.effective_id();

        if !request.has_method() {
            return JsonRpcResponse::error(
                id,
                RpcError::invalid_request_with_message("Invalid Request - missing method"),
            );
        }

        let method = match Method::from_str(&request.method) {
            Some(m) => m,
            None => {
                return JsonRpcResponse::error(
                    id,
                    RpcError::method_not_found_with_name(&request.method),
                );
            }
        };

        let result = match method {
            Method::Initialize => handle_initialize(request.params),
            Method::ToolsList => handle_tools_list(&self.server),
            Method::ToolsCall => handle_tools_call(&self.server, request.params).await,
        };

        match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, error),
        }
    }
}
