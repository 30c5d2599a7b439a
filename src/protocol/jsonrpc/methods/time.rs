// Copyright (c) 2025 Switchboard Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Implementation of the "time.now" method handler.
//!
//! Returns the server's current time as an RFC 3339 string. Takes no
//! parameters; any params sent by the caller are ignored.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::protocol::jsonrpc::dispatcher::{
    CallerContext, Dispatcher, MethodHandler, MethodResult,
};
use crate::protocol::jsonrpc::error::RpcError;
use crate::protocol::jsonrpc::types::Request;

/// Result payload for the time.now method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeResult {
    /// Current server time in RFC 3339 format
    pub time: String,
}

/// Handler returning the server's current time.
pub struct TimeHandler;

#[async_trait]
impl MethodHandler for TimeHandler {
    fn method_name(&self) -> &str {
        "time.now"
    }

    async fn handle(&self, _ctx: &CallerContext, _request: &Request) -> MethodResult {
        let result = TimeResult {
            time: Utc::now().to_rfc3339(),
        };

        serde_json::to_value(result)
            .map_err(|e| RpcError::internal_error(format!("failed to encode result: {e}")))
    }
}

/// Registers the time.now method handler with the dispatcher.
pub fn register_time_method(dispatcher: &mut Dispatcher) {
    dispatcher.register(TimeHandler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_time_now_returns_rfc3339() {
        let handler = TimeHandler;
        let request = Request::with_number_id("time.now", None, 1);

        let result = handler.handle(&CallerContext::default(), &request).await.unwrap();
        let parsed: TimeResult = serde_json::from_value(result).unwrap();
        assert!(DateTime::parse_from_rfc3339(&parsed.time).is_ok());
    }

    #[tokio::test]
    async fn test_time_now_ignores_params() {
        let handler = TimeHandler;
        let request = Request::with_number_id(
            "time.now",
            Some(serde_json::json!({"unexpected": true})),
            2,
        );

        let result = handler.handle(&CallerContext::default(), &request).await;
        assert!(result.is_ok());
    }
}
