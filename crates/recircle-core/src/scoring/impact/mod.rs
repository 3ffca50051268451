//! Environmental-impact scoring for second-hand transactions.
//!
//! A reported transaction (category, weight, optional transport distance)
//! flows through the GHG assessment, circularity estimate, and impact
//! scorer, producing an immutable [`ImpactReport`] that the service appends
//! to the report log and folds into the rolling [`CsrSummary`].

mod aggregate;
mod category;
mod circular;
mod factors;
mod ghg;
mod report;
pub mod repository;
mod router;
mod score;
mod service;

pub use aggregate::{CategoryBreakdown, CsrSummary, ImpactAnalytics, ScoreDistribution};
pub use category::{Category, CategoryResolution};
pub use circular::CircularityAssessment;
pub use factors::{AvoidedEmissions, CircularityFactor, EmissionFactor, GhgFactor};
pub use ghg::{GhgAssessment, GhgBreakdown};
pub use report::{ComplianceBreakdown, ImpactReport, LcaInfo};
pub use repository::{ReportLog, StorageError};
pub use router::impact_router;
pub use score::{ImpactLevel, ImpactScorer, PerformanceRating, ScoreWeights};
pub use service::{ImpactRequest, ImpactService, ImpactServiceError, ImpactSubmission, SubmissionStatus};

/// Compliance standards every report and summary is annotated with.
pub const COMPLIANCE_STANDARDS: [&str; 3] = ["GHG Protocol", "ISO 14040", "UNEP Circular Economy"];
