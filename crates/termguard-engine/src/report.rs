//! Exporter-facing views over classified records.
//!
//! The audit record set is the full classified slice itself; column naming
//! and rendering belong to the exporter.

use termguard_core::types::SearchTermRecord;

/// The review record set: non-excluded terms a marketer still has to look at.
pub fn review_records(records: &[SearchTermRecord]) -> Vec<&SearchTermRecord> {
    records.iter().filter(|r| !r.excluded).collect()
}
