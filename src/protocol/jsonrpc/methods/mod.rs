// Copyright (c) 2025 Switchboard Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Method handler implementations for the Switchboard dispatcher.
//!
//! Handlers are trivial leaf collaborators; the routing contract lives in the
//! dispatcher. Each submodule implements one method and exposes a
//! registration function.

pub mod time;

pub use time::{register_time_method, TimeHandler};
