//! Per-unit pipeline errors.
//!
//! A unit error aborts only the unit that raised it; sibling units in the
//! same batch are unaffected.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{RecordError, RuleError};

/// Errors that can abort a single batch unit's pipeline.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UnitError {
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// The unit exceeded its wall-clock budget and was cancelled cooperatively.
    #[error("Unit exceeded its {budget:?} computation budget")]
    Timeout { budget: Duration },

    /// Cancellation was requested externally.
    #[error("Unit cancelled")]
    Cancelled,
}

impl UnitError {
    /// The serializable kind reported in a unit's failure outcome.
    pub fn kind(&self) -> UnitErrorKind {
        match self {
            Self::Rule(_) => UnitErrorKind::InvalidRule,
            Self::Record(_) => UnitErrorKind::InvalidRecord,
            Self::Timeout { .. } => UnitErrorKind::Timeout,
            Self::Cancelled => UnitErrorKind::Cancelled,
        }
    }
}

/// Coarse classification of a unit failure, stable across the exporter boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitErrorKind {
    InvalidRule,
    InvalidRecord,
    Timeout,
    Cancelled,
}
