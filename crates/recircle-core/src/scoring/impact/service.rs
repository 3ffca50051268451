use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use super::aggregate::{CsrSummary, ImpactAnalytics};
use super::category::{Category, CategoryResolution};
use super::report::ImpactReport;
use super::repository::{ReportLog, StorageError};
use super::score::ImpactScorer;

/// Transaction submitted for impact scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct ImpactRequest {
    pub category: String,
    pub quantity_kg: f64,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

/// Service folding impact computations into the report log and CSR summary.
///
/// The summary mutex doubles as the write gate: log append and aggregate
/// update happen under it, so recomputing the summary from the log always
/// matches the incremental value.
pub struct ImpactService<L> {
    log: Arc<L>,
    scorer: ImpactScorer,
    summary: Mutex<CsrSummary>,
}

impl<L> ImpactService<L>
where
    L: ReportLog + 'static,
{
    pub fn new(log: Arc<L>) -> Self {
        Self {
            log,
            scorer: ImpactScorer::default(),
            summary: Mutex::new(CsrSummary::empty(Utc::now().date_naive())),
        }
    }

    /// Score a transaction and persist it. A storage failure after a valid
    /// computation is reported as a partial success carrying the report; it
    /// is not retried.
    pub fn submit(&self, request: ImpactRequest) -> Result<ImpactSubmission, ImpactServiceError> {
        if !request.quantity_kg.is_finite() || request.quantity_kg <= 0.0 {
            return Err(ImpactServiceError::InvalidQuantity(request.quantity_kg));
        }
        let distance_km = request.distance_km.unwrap_or(0.0);
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(ImpactServiceError::InvalidDistance(distance_km));
        }

        let resolution = Category::resolve(&request.category);
        if let CategoryResolution::Fallback { requested } = &resolution {
            warn!(requested, "unknown category, scoring with Food defaults");
        }
        let category = resolution.category();

        let report = ImpactReport::compute(
            Uuid::new_v4().to_string(),
            category,
            request.quantity_kg,
            distance_km,
            &self.scorer,
            Utc::now(),
        );
        info!(
            transaction = %report.transaction_id,
            category = category.label(),
            score = report.impact_score,
            co2e = report.co2e_saved_kg,
            "impact report computed"
        );

        let mut summary = self.summary.lock().expect("summary mutex poisoned");
        match self.log.append(report.clone()) {
            Ok(()) => {
                summary.absorb(&report, Utc::now().date_naive());
                Ok(ImpactSubmission {
                    status: SubmissionStatus::Stored,
                    report,
                })
            }
            Err(err) => {
                warn!(error = %err, "report computed but storage failed");
                Ok(ImpactSubmission {
                    status: SubmissionStatus::CalculationOnly,
                    report,
                })
            }
        }
    }

    pub fn summary(&self) -> CsrSummary {
        self.summary.lock().expect("summary mutex poisoned").clone()
    }

    /// Most recent `limit` reports, highest score first.
    pub fn reports(&self, limit: usize) -> Result<Vec<ImpactReport>, ImpactServiceError> {
        let mut reports = self.log.recent(limit)?;
        reports.sort_by(|a, b| b.impact_score.cmp(&a.impact_score));
        Ok(reports)
    }

    pub fn total_reports(&self) -> Result<usize, ImpactServiceError> {
        Ok(self.log.len()?)
    }

    pub fn analytics(&self) -> Result<ImpactAnalytics, ImpactServiceError> {
        let summary = self.summary.lock().expect("summary mutex poisoned");
        let reports = self.log.snapshot()?;
        Ok(ImpactAnalytics::from_reports(&reports, &summary))
    }

    /// Clear the log and restore the default summary.
    pub fn reset(&self) -> Result<(), ImpactServiceError> {
        let mut summary = self.summary.lock().expect("summary mutex poisoned");
        self.log.clear()?;
        *summary = CsrSummary::empty(Utc::now().date_naive());
        Ok(())
    }
}

/// Result of a submission: stored, or computed but not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSubmission {
    pub status: SubmissionStatus,
    pub report: ImpactReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Stored,
    CalculationOnly,
}

/// Error raised by the impact service.
#[derive(Debug, thiserror::Error)]
pub enum ImpactServiceError {
    #[error("quantity_kg must be greater than 0 (got {0})")]
    InvalidQuantity(f64),
    #[error("distance_km must be zero or positive (got {0})")]
    InvalidDistance(f64),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
