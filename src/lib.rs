//! Switchboard Server Library
//!
//! This library contains the core components of the Switchboard server: a
//! JSON-RPC 2.0 request dispatcher with a pluggable method registry,
//! transport adapters, and supporting configuration and error handling.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! The Switchboard server is designed with the following principles in mind:
//! - Strict component boundaries: the dispatcher owns routing and error
//!   mapping, handlers own business logic, transports own the wire
//! - Explicit caller context instead of ambient state
//! - Async-first approach for scalability
//! - Comprehensive error handling and propagation

// Re-export public modules
pub mod config;
pub mod error;
pub mod protocol;
pub mod transport;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Switchboard server.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::SwitchboardResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
