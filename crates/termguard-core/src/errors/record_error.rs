//! Search-term record errors.

/// A structurally malformed row.
///
/// Distinct from a merely-missing numeric field, which is repaired locally
/// with a defined default and never raised.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordError {
    #[error("Malformed record at index {index}: {reason}")]
    Malformed { index: usize, reason: String },
}
