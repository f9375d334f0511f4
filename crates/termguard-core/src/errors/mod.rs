//! Error handling for termguard.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod batch_error;
pub mod record_error;
pub mod rule_error;
pub mod unit_error;

pub use batch_error::BatchError;
pub use record_error::RecordError;
pub use rule_error::RuleError;
pub use unit_error::{UnitError, UnitErrorKind};
