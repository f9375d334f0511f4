//! Batch-level errors.

/// Errors that prevent a batch from running at all.
///
/// Per-unit failures are not errors at this level; they are reported inside
/// the batch result so sibling units still complete.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Worker pool construction failed: {0}")]
    WorkerPool(String),
}
