//! Execution context handed to migration actions
//!
//! The execution engine owns the context; actions only observe it. Call
//! [`MigrationContext::check`] between units of work to honor cancellation and
//! deadlines.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Reason an action should stop early
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("migration context was cancelled")]
    Cancelled,
    #[error("migration context deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation flag plus optional deadline
///
/// Clones share the cancellation flag, so cancelling any clone cancels all of them.
#[derive(Debug, Clone, Default)]
pub struct MigrationContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl MigrationContext {
    /// Create a context with no deadline
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an absolute deadline
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set a deadline relative to now
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel this context and every clone of it
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Return an error if the context was cancelled or its deadline has passed
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Cancelled` before `ContextError::DeadlineExceeded`
    /// when both apply.
    pub fn check(&self) -> Result<(), ContextError> {
        if self.is_cancelled() {
            return Err(ContextError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(ContextError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}
