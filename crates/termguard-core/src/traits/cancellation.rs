//! Cooperative cancellation with an optional wall-clock deadline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::errors::UnitError;

/// Cooperative cancellation checked by long-running pipeline loops between
/// records and between candidates.
pub trait Cancellable {
    /// Check if cancellation has been requested or the deadline has passed.
    fn is_cancelled(&self) -> bool;

    /// Request cancellation.
    fn cancel(&self);
}

/// Cancellation token wrapping an `AtomicBool`, optionally bounded by a
/// wall-clock deadline. Cloning shares the underlying flag.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
    budget: Option<Duration>,
}

impl CancellationToken {
    /// Create a token with no deadline (not cancelled).
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: None,
            budget: None,
        }
    }

    /// Create a token that expires once `budget` has elapsed.
    pub fn with_budget(budget: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Instant::now().checked_add(budget),
            budget: Some(budget),
        }
    }

    /// Return an error suitable for `?` propagation if the token has fired.
    ///
    /// A passed deadline reports as a timeout carrying the original budget;
    /// an externally-cancelled token reports as cancelled.
    pub fn checkpoint(&self) -> Result<(), UnitError> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(UnitError::Cancelled);
        }
        match (self.deadline, self.budget) {
            (Some(deadline), Some(budget)) if Instant::now() >= deadline => {
                Err(UnitError::Timeout { budget })
            }
            _ => Ok(()),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.checkpoint().is_err()
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
