//! Standard I/O transport.
//!
//! Reads newline-delimited JSON-RPC messages from stdin, hands each line to
//! the dispatcher, and writes the serialized response to stdout, one
//! envelope per line. The dispatcher is shared read-only; registration must
//! have completed before `run` is called.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::error::protocol::ProtocolError;
use crate::error::{report_error, ErrorContext, SwitchboardResult};
use crate::protocol::jsonrpc::{CallerContext, Dispatcher, Id, Response, RpcError};

/// Serves JSON-RPC over stdin/stdout.
pub struct StdioTransport {
    dispatcher: Arc<Dispatcher>,
    max_message_size: usize,
}

impl StdioTransport {
    /// Creates a new stdio transport over a fully registered dispatcher.
    pub fn new(dispatcher: Arc<Dispatcher>, max_message_size: usize) -> Self {
        Self {
            dispatcher,
            max_message_size,
        }
    }

    /// Runs the transport loop until stdin reaches end-of-file.
    pub async fn run(&self) -> SwitchboardResult<()> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();

        tracing::info!("stdio transport listening");
        self.serve(BufReader::new(stdin), &mut stdout).await?;
        tracing::info!("stdin closed, stdio transport shutting down");

        Ok(())
    }

    /// Drives the line loop over any reader/writer pair.
    ///
    /// Every non-empty inbound line gets exactly one response line; oversized
    /// messages are rejected with an invalid-request envelope without being
    /// parsed.
    async fn serve<R, W>(&self, reader: R, writer: &mut W) -> SwitchboardResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = if line.len() > self.max_message_size {
                report_error(
                    ErrorContext::new(
                        ProtocolError::MessageTooLarge {
                            size: line.len(),
                            max_size: self.max_message_size,
                        }
                        .into(),
                        "transport::stdio",
                    )
                    .with_details("message rejected before parsing"),
                );
                Response::error(Id::Null, RpcError::invalid_request())
            } else {
                let ctx = CallerContext::new().with_metadata("transport", "stdio");
                self.dispatcher.dispatch(line, &ctx).await
            };

            writer.write_all(response.to_json().as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        Ok(())
    }
}
