//! Test modules for the Switchboard server.
//!
//! This module contains cross-component testing infrastructure:
//! - Tests for the configuration system
//! - Tests for the error handling framework
//! - Shared fixtures and proptest strategies

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, method_name_strategy};
