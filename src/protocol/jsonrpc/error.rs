// Copyright (c) 2025 Switchboard Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Error types for the JSON-RPC 2.0 dispatcher.
//!
//! This module defines the fixed error-code catalogue and the wire error
//! object per the [JSON-RPC 2.0 specification](https://www.jsonrpc.org/specification#error_object).
//! Handler-defined application codes live outside the catalogue; the
//! dispatcher relays them verbatim and never clamps them to this set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard JSON-RPC 2.0 error codes as defined in the specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Parse error (-32700)
    /// Invalid JSON was received by the server.
    ParseError = -32700,

    /// Invalid Request (-32600)
    /// The JSON sent is not a valid Request object.
    InvalidRequest = -32600,

    /// Method not found (-32601)
    /// The method does not exist / is not available.
    MethodNotFound = -32601,

    /// Invalid params (-32602)
    /// Invalid method parameter(s).
    InvalidParams = -32602,

    /// Internal error (-32603)
    /// Internal JSON-RPC error.
    InternalError = -32603,
}

impl ErrorCode {
    /// Returns a string description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "Parse error",
            ErrorCode::InvalidRequest => "Invalid Request",
            ErrorCode::MethodNotFound => "Method not found",
            ErrorCode::InvalidParams => "Invalid params",
            ErrorCode::InternalError => "Internal error",
        }
    }

    /// Create an ErrorCode from a raw integer value.
    ///
    /// Returns None for anything outside the fixed catalogue, including
    /// handler-defined application codes.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -32700 => Some(ErrorCode::ParseError),
            -32600 => Some(ErrorCode::InvalidRequest),
            -32601 => Some(ErrorCode::MethodNotFound),
            -32602 => Some(ErrorCode::InvalidParams),
            -32603 => Some(ErrorCode::InternalError),
            _ => None,
        }
    }

    /// Returns the integer error code.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> i32 {
        code as i32
    }
}

/// JSON-RPC error object as defined in the specification.
///
/// `data` is omitted from the wire form when absent rather than serialized as
/// a null placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    /// The error code
    pub code: i32,

    /// A short description of the error
    pub message: String,

    /// Additional information about the error (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    /// Creates a new JSON-RPC error.
    ///
    /// The code is a raw integer so handler-defined application codes pass
    /// through without translation.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Creates a new JSON-RPC error with additional data.
    pub fn with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Invalid request: the payload could not be decoded into the Request shape.
    pub fn invalid_request() -> Self {
        Self::new(ErrorCode::InvalidRequest.code(), "invalid request")
    }

    /// Invalid request: the envelope parsed but carries the wrong protocol version.
    pub fn invalid_version() -> Self {
        Self::new(ErrorCode::InvalidRequest.code(), "invalid jsonrpc version")
    }

    /// Method not found: no handler registered under the requested name.
    pub fn method_not_found() -> Self {
        Self::new(ErrorCode::MethodNotFound.code(), "method not found")
    }

    /// Invalid params, with a handler-supplied description.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParams.code(), msg)
    }

    /// Internal error, reserved for the dispatcher's own unexpected-failure path.
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError.code(), msg)
    }
}

/// Error type for request parsing and shape validation.
///
/// These are the deterministic faults surfaced before a handler is ever
/// invoked; each maps to exactly one wire error in the dispatcher.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON deserialization error: the payload is not a Request at all
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The envelope parsed but its method name is empty
    #[error("method cannot be empty")]
    EmptyMethod,

    /// The envelope parsed but carries an unsupported protocol version
    #[error("invalid JSON-RPC version: {0}, must be 2.0")]
    Version(String),
}

/// Specialized Result type for JSON-RPC parsing and validation.
pub type Result<T> = std::result::Result<T, Error>;
