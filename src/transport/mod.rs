//! Transport adapters for the Switchboard server.
//!
//! Transports are external collaborators to the dispatcher: they own the
//! wire, deserialize nothing themselves, and call `dispatch` once per
//! inbound message.

pub mod stdio;

pub use stdio::StdioTransport;
