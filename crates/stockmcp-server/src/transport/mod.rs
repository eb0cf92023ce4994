//! Transport layer

pub mod stdio;

pub use stdio::{StdioTransport, TransportError, TransportResult};
