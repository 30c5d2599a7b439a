// Copyright (c) 2025 Switchboard Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! JSON-RPC 2.0 dispatcher for the Switchboard server.
//!
//! This module implements the request/response envelope of the
//! [JSON-RPC 2.0 specification](https://www.jsonrpc.org/specification) and the
//! routing core that connects inbound payloads to registered method handlers.
//!
//! # Features
//!
//! - Protocol-compliant request parsing and shape validation
//! - Method registry with last-write-wins registration
//! - Deterministic error mapping with the standard error-code catalogue
//! - Verbatim pass-through of handler-defined application errors
//! - Opaque `params` payloads: the core forwards, handlers decode
//! - Asynchronous handler support
//!
//! # Example
//!
//! ```
//! use switchboard_lib::protocol::jsonrpc::{CallerContext, Dispatcher, FnHandler};
//! use serde_json::json;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let mut dispatcher = Dispatcher::new();
//!
//! dispatcher.register(FnHandler::new("echo", |params, _ctx| async move {
//!     Ok(params.unwrap_or(json!(null)))
//! }));
//!
//! let raw = r#"{"jsonrpc":"2.0","id":1,"method":"echo","params":{"message":"hi"}}"#;
//! let response = dispatcher.dispatch(raw, &CallerContext::default()).await;
//!
//! assert_eq!(response.result, Some(json!({"message":"hi"})));
//! # });
//! ```

pub mod dispatcher;
pub mod error;
pub mod methods;
pub mod setup;
pub mod types;
pub mod validation;

// Re-exports
pub use dispatcher::{CallerContext, Dispatcher, FnHandler, MethodHandler, MethodResult};
pub use error::{Error, ErrorCode, Result, RpcError};
pub use setup::{create_dispatcher, register_standard_methods};
pub use types::{Id, Request, Response, PROTOCOL_VERSION};
pub use validation::{parse_request, validate_request};

#[cfg(test)]
mod tests;
