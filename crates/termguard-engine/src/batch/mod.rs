//! Batch orchestrator.
//!
//! Runs the matcher, suggestion engine, and aggregator once per independent
//! unit on a fixed-size worker pool. Units share nothing mutable: the rule
//! rows and input terms are moved into their unit, and every derived
//! structure is owned by the worker that built it. A failing unit is reported
//! in place and never aborts its siblings.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use termguard_core::config::EngineConfig;
use termguard_core::errors::{BatchError, UnitError, UnitErrorKind};
use termguard_core::traits::cancellation::CancellationToken;
use termguard_core::types::{
    AnalyticsSummary, CandidateSuggestion, NegativeKeywordRule, RuleRow, SearchTermRecord,
};

use crate::analytics;
use crate::matcher::NegativeMatcher;
use crate::suggest;

/// One independent unit of work: a term report plus its raw rule rows.
///
/// Rules are compiled inside the unit so that an invalid match type fails
/// this unit alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchUnit {
    pub id: String,
    pub terms: Vec<SearchTermRecord>,
    pub rules: Vec<RuleRow>,
}

impl BatchUnit {
    pub fn new(id: impl Into<String>, terms: Vec<SearchTermRecord>, rules: Vec<RuleRow>) -> Self {
        Self {
            id: id.into(),
            terms,
            rules,
        }
    }
}

/// Definite outcome of one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UnitOutcome {
    Success {
        summary: AnalyticsSummary,
        records: Vec<SearchTermRecord>,
        candidates: Vec<CandidateSuggestion>,
    },
    Failure {
        kind: UnitErrorKind,
        message: String,
    },
}

impl UnitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// A unit's outcome tagged with its identity. Callers correlate by unit id,
/// never by completion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitReport {
    pub unit_id: String,
    pub outcome: UnitOutcome,
}

/// Aggregate batch status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchStatus {
    AllSucceeded,
    /// Mixed outcomes: some units failed while siblings completed.
    PartialFailure,
    AllFailed,
}

/// Combined result listing every unit's outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub reports: Vec<UnitReport>,
    pub succeeded: usize,
    pub failed: usize,
    pub status: BatchStatus,
}

impl BatchResult {
    /// Look up a unit's report by identity.
    pub fn report(&self, unit_id: &str) -> Option<&UnitReport> {
        self.reports.iter().find(|r| r.unit_id == unit_id)
    }
}

/// Run every unit's pipeline on a dedicated pool of `parallelism` workers.
///
/// Each unit runs under its own wall-clock budget, checked cooperatively
/// between record chunks and between candidates; a timed-out unit releases
/// its partial state and is reported as a timeout failure.
pub fn run_batch(units: Vec<BatchUnit>, config: &EngineConfig) -> Result<BatchResult, BatchError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.batch.parallelism.max(1))
        .build()
        .map_err(|e| BatchError::WorkerPool(e.to_string()))?;

    let total = units.len();
    let reports: Vec<UnitReport> =
        pool.install(|| units.into_par_iter().map(|unit| run_unit(unit, config)).collect());

    let succeeded = reports.iter().filter(|r| r.outcome.is_success()).count();
    let failed = total - succeeded;
    let status = if failed == 0 {
        BatchStatus::AllSucceeded
    } else if succeeded == 0 {
        BatchStatus::AllFailed
    } else {
        BatchStatus::PartialFailure
    };

    info!(total, succeeded, failed, ?status, "batch complete");
    Ok(BatchResult {
        reports,
        succeeded,
        failed,
        status,
    })
}

fn run_unit(unit: BatchUnit, config: &EngineConfig) -> UnitReport {
    let token = CancellationToken::with_budget(config.batch.unit_timeout());
    let unit_id = unit.id.clone();

    let outcome = match run_pipeline(unit, config, &token) {
        Ok((summary, records, candidates)) => {
            info!(unit = %unit_id, terms = records.len(), "unit succeeded");
            UnitOutcome::Success {
                summary,
                records,
                candidates,
            }
        }
        Err(error) => {
            warn!(unit = %unit_id, %error, "unit failed");
            UnitOutcome::Failure {
                kind: error.kind(),
                message: error.to_string(),
            }
        }
    };

    UnitReport { unit_id, outcome }
}

/// One full pipeline execution: compile rules, match, suggest, aggregate.
fn run_pipeline(
    unit: BatchUnit,
    config: &EngineConfig,
    token: &CancellationToken,
) -> Result<(AnalyticsSummary, Vec<SearchTermRecord>, Vec<CandidateSuggestion>), UnitError> {
    let rules: Vec<NegativeKeywordRule> = unit
        .rules
        .iter()
        .map(NegativeKeywordRule::parse)
        .collect::<Result<_, _>>()?;
    token.checkpoint()?;

    let mut records = unit.terms;
    NegativeMatcher::new(&rules).classify_all_cancellable(&mut records, token)?;

    let candidates = suggest::suggest_cancellable(
        &records,
        &config.suggestion,
        suggest::default_poor_performer,
        token,
    )?;

    let summary =
        analytics::aggregate_cancellable(&records, &candidates, &config.analytics, token)?;

    Ok((summary, records, candidates))
}
