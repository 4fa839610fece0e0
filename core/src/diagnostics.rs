//! Where controller failures go.
//!
//! Failures never reach the caller of a controller operation. They are handed
//! to a `Diagnostics` sink instead, which the host picks at construction time.

use std::sync::Mutex;

use crate::controller::Operation;
use crate::error::ApiError;

pub trait Diagnostics: Send + Sync {
    /// Called once for every operation that ends without applying its change.
    fn operation_failed(&self, operation: &Operation, error: &ApiError);
}

/// Default sink: one `tracing` error event per failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn operation_failed(&self, operation: &Operation, error: &ApiError) {
        tracing::error!(operation = %operation, error = %error, "todo operation failed");
    }
}

/// A failure captured by `RecordingDiagnostics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFailure {
    pub operation: Operation,
    pub message: String,
}

/// Keeps failures in memory so hosts and tests can inspect them.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    failures: Mutex<Vec<RecordedFailure>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<RecordedFailure> {
        self.failures
            .lock()
            .map(|failures| failures.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.failures().is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn operation_failed(&self, operation: &Operation, error: &ApiError) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push(RecordedFailure {
                operation: operation.clone(),
                message: error.to_string(),
            });
        }
    }
}
