//! Protocol error module.
//!
//! This module defines error types surfaced by the JSON-RPC handling layer
//! to the rest of the application.

use thiserror::Error;

/// Errors that can occur during protocol operations.
///
/// Faults inside the JSON-RPC envelope itself are reported on the wire as
/// error responses, not through this type; only transport-level rejections
/// surface here.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Error when the message exceeds the maximum allowed size.
    #[error("Message size exceeds maximum allowed: {size} > {max_size}")]
    MessageTooLarge {
        /// The actual size of the message in bytes
        size: usize,
        /// The maximum allowed size in bytes
        max_size: usize,
    },
}
