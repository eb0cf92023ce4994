//! Stdio transport
//!
//! Reads and writes newline-delimited JSON over stdin/stdout. The
//! transport knows nothing about JSON-RPC semantics; it moves one JSON
//! value per line and reports EOF and malformed lines distinctly so the
//! caller can keep the read loop alive across bad input.

use serde::{de::DeserializeOwned, Serialize};
use std::io;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter, Stdin, Stdout,
};
use tracing::trace;

/// Error type for transport operations
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input line was not a decodable message; the stream itself is
    /// still readable afterwards
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Newline-delimited JSON over a reader/writer pair.
///
/// Generic over the handles so tests can drive the full loop with
/// in-memory buffers.
pub struct StdioTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    reader: R,
    writer: BufWriter<W>,
}

impl StdioTransport<BufReader<Stdin>, Stdout> {
    /// Create a transport over the process's actual stdin/stdout
    pub fn new() -> Self {
        Self::from_handles(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl Default for StdioTransport<BufReader<Stdin>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a transport from custom reader/writer handles
    pub fn from_handles(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer: BufWriter::new(writer),
        }
    }

    /// Read the next JSON message.
    ///
    /// Returns `Ok(Some(value))` for a decoded message, `Ok(None)` at EOF,
    /// and `Err(TransportError::Json)` for a line that is not valid JSON
    /// for `T`. Empty lines are skipped.
    pub async fn read_message<T>(&mut self) -> TransportResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        loop {
            let mut line = String::new();
            let bytes_read = self.reader.read_line(&mut line).await?;

            if bytes_read == 0 {
                trace!("EOF reached on transport input");
                return Ok(None);
            }

            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                continue;
            }

            trace!(message = %trimmed, "received message");

            let message: T = serde_json::from_str(trimmed)?;
            return Ok(Some(message));
        }
    }

    /// Write a message followed by a newline and flush immediately
    pub async fn write_message<T>(&mut self, message: &T) -> TransportResult<()>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(message)?;
        trace!(message = %json, "sending message");

        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;

        Ok(())
    }

    /// Consume the transport and return the writer's inner handle
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{JsonRpcRequest, RequestId};
    use std::io::Cursor;

    fn mock_transport(input: &str) -> StdioTransport<BufReader<Cursor<Vec<u8>>>, Vec<u8>> {
        let reader = BufReader::new(Cursor::new(input.as_bytes().to_vec()));
        StdioTransport::from_handles(reader, Vec::new())
    }

    #[tokio::test]
    async fn test_read_request() {
        let mut transport =
            mock_transport("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/list\"}\n");

        let request: Option<JsonRpcRequest> = transport.read_message().await.unwrap();
        let request = request.unwrap();

        assert_eq!(request.id, Some(RequestId::Number(1)));
        assert_eq!(request.method, "tools/list");
    }

    #[tokio::test]
    async fn test_read_eof() {
        let mut transport = mock_transport("");
        let message: Option<JsonRpcRequest> = transport.read_message().await.unwrap();
        assert!(message.is_none());
    }

    #[tokio::test]
    async fn test_empty_lines_skipped() {
        let mut transport = mock_transport("\n\n{\"method\":\"initialize\"}\n");

        let request: Option<JsonRpcRequest> = transport.read_message().await.unwrap();
        assert_eq!(request.unwrap().method, "initialize");
    }

    #[tokio::test]
    async fn test_malformed_line_is_json_error() {
        let mut transport = mock_transport("not valid json\n{\"method\":\"initialize\"}\n");

        let result: TransportResult<Option<JsonRpcRequest>> = transport.read_message().await;
        assert!(matches!(result, Err(TransportError::Json(_))));

        // The stream survives the bad line
        let request: Option<JsonRpcRequest> = transport.read_message().await.unwrap();
        assert_eq!(request.unwrap().method, "initialize");
    }

    #[tokio::test]
    async fn test_write_appends_newline() {
        let mut transport = mock_transport("");
        transport
            .write_message(&serde_json::json!({"jsonrpc": "2.0", "id": 1}))
            .await
            .unwrap();

        let output = String::from_utf8(transport.into_writer()).unwrap();
        assert!(output.ends_with('\n'));
        assert_eq!(output.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_sequential_messages_in_order() {
        let input = "{\"id\":1,\"method\":\"a\"}\n{\"id\":2,\"method\":\"b\"}\n";
        let mut transport = mock_transport(input);

        let first: JsonRpcRequest = transport.read_message().await.unwrap().unwrap();
        let second: JsonRpcRequest = transport.read_message().await.unwrap().unwrap();

        assert_eq!(first.id, Some(RequestId::Number(1)));
        assert_eq!(second.id, Some(RequestId::Number(2)));
    }
}
