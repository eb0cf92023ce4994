//! Individual method handlers
//!
//! Each handler returns either a result value or an `RpcError`; the
//! dispatcher wraps whichever comes back into a response.

use serde_json::{json, Value};
use tracing::debug;

use crate::protocol::{RpcError, MCP_VERSION};
use crate::server::StockMcpServer;

/// Handle the initialize request.
///
/// Parameters have no effect on the outcome; client info is logged when
/// present. Returns the fixed capability and identity document.
pub fn handle_initialize(params: Option<Value>) -> Result<Value, RpcError> {
    if let Some(client) = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
    {
        debug!(%client, "initialize");
    }

    let (name, version) = StockMcpServer::server_info();

    Ok(json!({
        "protocolVersion": MCP_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": name,
            "version": version
        }
    }))
}

/// Handle the tools/list request
pub fn handle_tools_list(server: &StockMcpServer) -> Result<Value, RpcError> {
    let tools: Vec<Value> = server
        .list_tools()
        .into_iter()
        .map(|tool| {
            json!({
                "name": tool.name,
                "description": tool.description,
                "inputSchema": tool.input_schema
            })
        })
        .collect();

    Ok(json!({ "tools": tools }))
}

/// Handle the tools/call request.
///
/// Each malformed-params case gets its own invalid-params message so a
/// caller can tell which part of the envelope was wrong.
pub async fn handle_tools_call(
    server: &StockMcpServer,
    params: Option<Value>,
) -> Result<Value, RpcError> {
    let params = match params {
        None => return Err(RpcError::invalid_params_with_message("Missing params")),
        Some(p) => p,
    };

    let params = params
        .as_object()
        .ok_or_else(|| RpcError::invalid_params_with_message("Invalid params"))?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| RpcError::invalid_params_with_message("Missing tool name"))?;

    let arguments = params
        .get("arguments")
        .filter(|v| v.is_object())
        .ok_or_else(|| RpcError::invalid_params_with_message("Missing arguments"))?;

    let text = server.call_tool(name, arguments).await?;

    Ok(json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    }))
}
