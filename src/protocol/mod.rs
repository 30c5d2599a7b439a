//! Protocol module for the Switchboard server.
//!
//! This module implements the JSON-RPC 2.0 envelope and the request routing
//! core.

pub mod jsonrpc;
