// Copyright (c) 2025 Switchboard Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Test suite for the JSON-RPC 2.0 dispatcher.
//!
//! - Unit tests for the wire-level routing contract
//! - Integration tests for the full parse/route/respond flow
//! - Property-based tests for the envelope invariants
