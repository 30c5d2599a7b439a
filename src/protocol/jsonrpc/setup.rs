// Copyright (c) 2025 Switchboard Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Setup and initialization utilities for the dispatcher.
//!
//! This module provides functions to register method handlers and build a
//! ready-to-serve dispatcher. Registration must complete here, before the
//! dispatcher is shared with a transport.

use crate::protocol::jsonrpc::dispatcher::Dispatcher;
use crate::protocol::jsonrpc::methods::register_time_method;

/// Registers all standard method handlers with the dispatcher.
pub fn register_standard_methods(dispatcher: &mut Dispatcher) {
    register_time_method(dispatcher);

    // Future method handlers will be registered here
}

/// Creates a fully configured dispatcher with all standard methods.
pub fn create_dispatcher() -> Dispatcher {
    let mut dispatcher = Dispatcher::new();
    register_standard_methods(&mut dispatcher);
    dispatcher
}
