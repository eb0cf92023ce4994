//! JSON-RPC error codes and error response builders

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The JSON-RPC 2.0 error codes this server responds with.
///
/// Undecodable input is logged and skipped rather than answered, so the
/// standard parse-error code never appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The JSON sent is not a valid Request object
    InvalidRequest,
    /// The method does not exist
    MethodNotFound,
    /// Invalid method parameter(s)
    InvalidParams,
    /// Internal error, including provider fetch failures
    InternalError,
}

impl ErrorCode {
    /// Get the numeric error code
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }

    /// Get the default message for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid Request",
            Self::MethodNotFound => "Method not found",
            Self::InvalidParams => "Invalid params",
            Self::InternalError => "Internal error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.default_message())
    }
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Optional additional error data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    /// Create an error from an ErrorCode with its default message
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code: code.code(),
            message: code.default_message().to_string(),
            data: None,
        }
    }

    /// Create an error from an ErrorCode with a custom message
    pub fn from_code_with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }

    /// Invalid request with details, e.g. a missing method field
    pub fn invalid_request_with_message(message: impl Into<String>) -> Self {
        Self::from_code_with_message(ErrorCode::InvalidRequest, message)
    }

    /// Method not found, naming the offending method
    pub fn method_not_found_with_name(method: &str) -> Self {
        Self::from_code_with_message(
            ErrorCode::MethodNotFound,
            format!("Method not found: {}", method),
        )
    }

    /// Invalid params with details
    pub fn invalid_params_with_message(message: impl Into<String>) -> Self {
        Self::from_code_with_message(ErrorCode::InvalidParams, message)
    }

    /// Internal error with details
    pub fn internal_error_with_message(message: impl Into<String>) -> Self {
        Self::from_code_with_message(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}
