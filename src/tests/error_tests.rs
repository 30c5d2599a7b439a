//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, SwitchboardError,
};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = SwitchboardError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let switchboard_error = SwitchboardError::Io(io_error);

    let error_string = format!("{switchboard_error}");
    assert!(error_string.contains("file not found"));
}

/// Test that protocol errors convert into the top-level error type.
#[test]
fn test_protocol_error_conversion() {
    let protocol_error = crate::error::protocol::ProtocolError::MessageTooLarge {
        size: 2048,
        max_size: 1024,
    };
    let switchboard_error: SwitchboardError = protocol_error.into();

    let error_string = format!("{switchboard_error}");
    assert!(error_string.contains("2048"));
    assert!(error_string.contains("1024"));
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: Arc<std::sync::atomic::AtomicUsize>,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reports.
#[test]
fn test_global_error_reporter() {
    let count = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let reporter = MockErrorReporter {
        reported_count: Arc::clone(&count),
    };
    set_error_reporter(Arc::new(reporter));

    report_error(ErrorContext::new(
        SwitchboardError::Custom("reported".to_string()),
        "error_tests",
    ));

    assert!(count.load(std::sync::atomic::Ordering::SeqCst) >= 1);
}
