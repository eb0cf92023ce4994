//! Supported method names

use std::fmt;

/// Protocol version returned from initialize
pub const MCP_VERSION: &str = "2024-11-05";

/// Method names as constants
pub mod method_names {
    pub const INITIALIZE: &str = "initialize";
    pub const TOOLS_LIST: &str = "tools/list";
    pub const TOOLS_CALL: &str = "tools/call";
}

/// The three methods this server dispatches.
///
/// Every other method name, notifications included, gets a
/// method-not-found response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Initialize,
    ToolsList,
    ToolsCall,
}

impl Method {
    /// Get the string representation of this method
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialize => method_names::INITIALIZE,
            Self::ToolsList => method_names::TOOLS_LIST,
            Self::ToolsCall => method_names::TOOLS_CALL,
        }
    }

    /// Parse a method string, `None` for anything unsupported
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            method_names::INITIALIZE => Some(Self::Initialize),
            method_names::TOOLS_LIST => Some(Self::ToolsList),
            method_names::TOOLS_CALL => Some(Self::ToolsCall),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
