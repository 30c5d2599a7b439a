// Copyright (c) 2025 Switchboard Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Types for the JSON-RPC 2.0 protocol.
//!
//! This module defines the core data structures for JSON-RPC 2.0 requests and
//! responses according to the [specification](https://www.jsonrpc.org/specification).
//! Requests carry their `params` as an uninterpreted JSON value; the dispatcher
//! never inspects them, only forwards them to the matched handler.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::RpcError;

/// The one protocol version this dispatcher speaks.
pub const PROTOCOL_VERSION: &str = "2.0";

/// JSON-RPC request identifier.
///
/// Can be a string, number, or null as per the JSON-RPC 2.0 specification.
/// The dispatcher never interprets its contents; it is echoed back verbatim
/// in the response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// String identifier
    String(String),

    /// Numeric identifier, kept as the wire's own number representation so
    /// fractional and full-u64-range ids survive the round trip
    Number(serde_json::Number),

    /// Null identifier (not recommended but valid per spec)
    Null,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "{}", s),
            Id::Number(n) => write!(f, "{}", n),
            Id::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n.into())
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

/// A JSON-RPC 2.0 request object.
///
/// The `jsonrpc` field deserializes as a plain string rather than a validating
/// type: a request carrying the wrong version must still parse so the error
/// response can echo the caller's id.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Request {
    /// JSON-RPC protocol version, expected to be "2.0"
    pub jsonrpc: String,

    /// Name of the method to be invoked
    pub method: String,

    /// Method parameters, opaque to the dispatcher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,

    /// Request identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

impl Request {
    /// Creates a new JSON-RPC 2.0 request.
    pub fn new(method: impl Into<String>, params: Option<serde_json::Value>, id: Option<Id>) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }

    /// Creates a new JSON-RPC request with a string id.
    pub fn with_string_id(
        method: impl Into<String>,
        params: Option<serde_json::Value>,
        id: impl Into<String>,
    ) -> Self {
        Self::new(method, params, Some(Id::String(id.into())))
    }

    /// Creates a new JSON-RPC request with a numeric id.
    pub fn with_number_id(method: impl Into<String>, params: Option<serde_json::Value>, id: i64) -> Self {
        Self::new(method, params, Some(Id::from(id)))
    }

    /// Returns the request id, substituting `Id::Null` when absent.
    pub fn id_or_null(&self) -> Id {
        self.id.clone().unwrap_or(Id::Null)
    }
}

/// A JSON-RPC 2.0 response object.
///
/// Exactly one of `result`/`error` is populated, never both, never neither.
/// The constructors below are the only way responses are built, which keeps
/// that invariant out of reach of callers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Response {
    /// JSON-RPC protocol version, always "2.0"
    pub jsonrpc: String,

    /// The result of the method invocation, if successful
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    /// The error object, if the call failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,

    /// Same identifier as the request this is responding to
    pub id: Id,
}

impl Response {
    /// Creates a new successful JSON-RPC 2.0 response.
    pub fn success(id: Id, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Creates a new error JSON-RPC 2.0 response.
    pub fn error(id: Id, error: RpcError) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Returns true if this response contains a successful result.
    pub fn is_success(&self) -> bool {
        self.result.is_some() && self.error.is_none()
    }

    /// Returns true if this response contains an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Serializes the response to its wire form.
    ///
    /// Serialization of a well-formed response cannot fail; the fallback
    /// literal keeps the transport contract (always emit a valid envelope)
    /// even if it somehow does.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"jsonrpc":"2.0","error":{"code":-32603,"message":"internal error"},"id":null}"#
                .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::jsonrpc::error::{ErrorCode, RpcError};
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = Request::with_number_id(
            "subtract",
            Some(json!({"minuend": 42, "subtrahend": 23})),
            1,
        );

        let json_str = serde_json::to_string(&request).unwrap();
        let expected = r#"{"jsonrpc":"2.0","method":"subtract","params":{"minuend":42,"subtrahend":23},"id":1}"#;
        assert_eq!(json_str, expected);

        let deserialized: Request = serde_json::from_str(expected).unwrap();
        assert_eq!(deserialized.method, "subtract");
        assert_eq!(deserialized.id, Some(Id::from(1)));
    }

    #[test]
    fn test_request_without_id_or_params() {
        let parsed: Request = serde_json::from_str(r#"{"jsonrpc":"2.0","method":"ping"}"#).unwrap();
        assert_eq!(parsed.method, "ping");
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.params, None);
        assert_eq!(parsed.id_or_null(), Id::Null);
    }

    #[test]
    fn test_request_with_null_id() {
        let parsed: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"ping","id":null}"#).unwrap();
        assert_eq!(parsed.id, Some(Id::Null));
        assert_eq!(parsed.id_or_null(), Id::Null);
    }

    #[test]
    fn test_request_with_fractional_id() {
        let parsed: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"ping","id":1.5}"#).unwrap();
        let id = parsed.id_or_null();
        assert!(matches!(&id, Id::Number(n) if n.as_f64() == Some(1.5)));

        let wire = serde_json::to_string(&Response::success(id, json!(null))).unwrap();
        assert!(wire.ends_with(r#""id":1.5}"#));
    }

    #[test]
    fn test_request_with_u64_range_id() {
        let raw = r#"{"jsonrpc":"2.0","method":"ping","id":18446744073709551615}"#;
        let parsed: Request = serde_json::from_str(raw).unwrap();
        let id = parsed.id_or_null();
        assert!(matches!(&id, Id::Number(n) if n.as_u64() == Some(u64::MAX)));

        let wire = serde_json::to_string(&Response::success(id, json!(null))).unwrap();
        assert!(wire.ends_with(r#""id":18446744073709551615}"#));
    }

    #[test]
    fn test_response_serialization() {
        // Success response
        let success = Response::success(Id::from(1), json!(19));

        let json_str = serde_json::to_string(&success).unwrap();
        let expected = r#"{"jsonrpc":"2.0","result":19,"id":1}"#;
        assert_eq!(json_str, expected);
        assert!(success.is_success());

        // Error response
        let error = Response::error(
            Id::String("abc".to_string()),
            RpcError::new(ErrorCode::MethodNotFound.code(), "method not found"),
        );

        let json_str = serde_json::to_string(&error).unwrap();
        let expected = r#"{"jsonrpc":"2.0","error":{"code":-32601,"message":"method not found"},"id":"abc"}"#;
        assert_eq!(json_str, expected);
        assert!(error.is_error());
    }

    #[test]
    fn test_response_null_id_serializes_as_null() {
        let response = Response::error(Id::Null, RpcError::invalid_request());
        let json_str = response.to_json();
        assert!(json_str.ends_with(r#""id":null}"#));
    }

    #[test]
    fn test_exactly_one_of_result_or_error() {
        let success = Response::success(Id::from(1), json!({"ok": true}));
        assert!(success.result.is_some() && success.error.is_none());

        let failure = Response::error(Id::from(2), RpcError::invalid_request());
        assert!(failure.result.is_none() && failure.error.is_some());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(Id::String("abc".to_string()).to_string(), "abc");
        assert_eq!(Id::from(123).to_string(), "123");
        assert_eq!(Id::Null.to_string(), "null");
    }
}
