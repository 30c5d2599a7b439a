// Copyright (c) 2025 Switchboard Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Request parsing and shape validation for the JSON-RPC 2.0 dispatcher.
//!
//! Parsing and validation are split on purpose: a payload that fails to parse
//! has no trustworthy id, while a parsed envelope that fails validation does.
//! The dispatcher uses that distinction to decide whether the error response
//! echoes the caller's id or carries null.

use super::error::{Error, Result};
use super::types::{Request, PROTOCOL_VERSION};

/// Parses a raw payload into a JSON-RPC request.
///
/// Fails on malformed JSON and on structurally wrong envelopes (missing
/// `method`, wrong field types). `params` is accepted as any JSON value; the
/// core never inspects it.
pub fn parse_request(raw: &str) -> Result<Request> {
    let request: Request = serde_json::from_str(raw)?;
    Ok(request)
}

/// Validates the shape of a parsed request.
///
/// Checks that the protocol version is exactly "2.0" and the method name is
/// non-empty, in that order. Both faults leave the envelope's id usable, so
/// they are reported separately from parse failures.
pub fn validate_request(request: &Request) -> Result<()> {
    if request.jsonrpc != PROTOCOL_VERSION {
        return Err(Error::Version(request.jsonrpc.clone()));
    }

    if request.method.is_empty() {
        return Err(Error::EmptyMethod);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::jsonrpc::types::Id;

    #[test]
    fn test_parse_valid_request() {
        let request_str = r#"{"jsonrpc": "2.0", "method": "subtract", "params": {"minuend": 42, "subtrahend": 23}, "id": 1}"#;
        let request = parse_request(request_str).unwrap();
        assert_eq!(request.method, "subtract");
        assert_eq!(request.id, Some(Id::from(1)));
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_parse_scalar_params_accepted() {
        // params is opaque to the core: any JSON value parses
        let request_str = r#"{"jsonrpc": "2.0", "method": "echo", "params": "just-a-string", "id": 1}"#;
        let request = parse_request(request_str).unwrap();
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_parse_invalid_json() {
        let invalid_json = r#"{"jsonrpc": "2.0", "method": "test", "params": [1, 2,"#;
        match parse_request(invalid_json) {
            Err(Error::Json(_)) => {}
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_field_type() {
        let wrong_type = r#"{"jsonrpc": "2.0", "method": 42, "id": 1}"#;
        match parse_request(wrong_type) {
            Err(Error::Json(_)) => {}
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_non_object_payload() {
        match parse_request("[1, 2, 3]") {
            Err(Error::Json(_)) => {}
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_invalid_version() {
        let request_str = r#"{"jsonrpc": "1.0", "method": "subtract", "id": 1}"#;
        let request = parse_request(request_str).unwrap();
        match validate_request(&request) {
            Err(Error::Version(v)) => assert_eq!(v, "1.0"),
            other => panic!("Expected Version error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_method() {
        let request_str = r#"{"jsonrpc": "2.0", "method": "", "id": 1}"#;
        let request = parse_request(request_str).unwrap();
        match validate_request(&request) {
            Err(Error::EmptyMethod) => {}
            other => panic!("Expected EmptyMethod error, got {:?}", other),
        }
    }

    #[test]
    fn test_version_checked_before_empty_method() {
        // Both faults at once: the version fault wins.
        let request_str = r#"{"jsonrpc": "1.0", "method": "", "id": 1}"#;
        let request = parse_request(request_str).unwrap();
        match validate_request(&request) {
            Err(Error::Version(v)) => assert_eq!(v, "1.0"),
            other => panic!("Expected Version error, got {:?}", other),
        }
    }
}
