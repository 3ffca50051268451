use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::ReportLog;
use super::service::{ImpactRequest, ImpactService, ImpactServiceError, SubmissionStatus};

/// Router exposing the impact pipeline to the transport layer.
pub fn impact_router<L>(service: Arc<ImpactService<L>>) -> Router
where
    L: ReportLog + 'static,
{
    Router::new()
        .route("/calculate-impact", post(calculate_handler::<L>))
        .route("/csr-summary", get(summary_handler::<L>))
        .route("/impact-reports", get(reports_handler::<L>))
        .route("/impact-analytics", get(analytics_handler::<L>))
        .route("/standards-info", get(standards_handler))
        .route("/reset-data", post(reset_handler::<L>))
        .with_state(service)
}

pub(crate) async fn calculate_handler<L>(
    State(service): State<Arc<ImpactService<L>>>,
    Json(request): Json<ImpactRequest>,
) -> Response
where
    L: ReportLog + 'static,
{
    match service.submit(request) {
        Ok(submission) => {
            let (status_label, message) = match submission.status {
                SubmissionStatus::Stored => (
                    "success",
                    format!(
                        "Impact calculated successfully! Score: {}",
                        submission.report.impact_score
                    ),
                ),
                SubmissionStatus::CalculationOnly => (
                    "partial_success",
                    format!(
                        "Impact calculated but storage failed. Score: {}",
                        submission.report.impact_score
                    ),
                ),
            };
            let payload = json!({
                "status": status_label,
                "transaction_id": submission.report.transaction_id,
                "impact": submission.report,
                "message": message,
                "standards_compliant": true,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err @ ImpactServiceError::InvalidQuantity(_))
        | Err(err @ ImpactServiceError::InvalidDistance(_)) => {
            let payload = json!({ "status": "error", "message": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "status": "error", "message": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn summary_handler<L>(State(service): State<Arc<ImpactService<L>>>) -> Response
where
    L: ReportLog + 'static,
{
    let summary = service.summary();
    let payload = json!({
        "status": "success",
        "data": {
            "total_co2_saved": summary.total_co2_saved,
            "total_co2e_saved": summary.total_co2e_saved,
            "total_water_saved": summary.total_water_saved,
            "total_waste_diverted": summary.total_waste_diverted,
            "total_social_value": summary.total_social_value,
            "total_impact_score": summary.total_impact_score,
            "total_impacts": summary.total_impacts,
            "average_impact_score": summary.average_impact_score,
            "impact_level": summary.impact_level.label(),
            "performance_rating": summary.performance_rating.label(),
            "last_updated": summary.last_updated,
            "compliance_standards": summary.compliance_standards,
        },
    });
    (StatusCode::OK, Json(payload)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportsQuery {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    50
}

pub(crate) async fn reports_handler<L>(
    State(service): State<Arc<ImpactService<L>>>,
    Query(query): Query<ReportsQuery>,
) -> Response
where
    L: ReportLog + 'static,
{
    match (service.reports(query.limit), service.total_reports()) {
        (Ok(reports), Ok(total)) => {
            let payload = json!({
                "status": "success",
                "data": reports,
                "total_records": total,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        (Err(err), _) | (_, Err(err)) => {
            let payload = json!({ "status": "error", "message": err.to_string(), "data": [] });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn analytics_handler<L>(State(service): State<Arc<ImpactService<L>>>) -> Response
where
    L: ReportLog + 'static,
{
    match service.analytics() {
        Ok(analytics) => {
            let payload = json!({
                "status": "success",
                "data": {
                    "total_impacts": analytics.total_impacts,
                    "average_score": analytics.average_score,
                    "impact_level": analytics.impact_level.label(),
                    "category_breakdown": analytics.category_breakdown,
                    "score_distribution": analytics.score_distribution,
                    "total_co2_saved": analytics.total_co2_saved,
                    "total_co2e_saved": analytics.total_co2e_saved,
                    "total_water_saved": analytics.total_water_saved,
                    "total_waste_diverted": analytics.total_waste_diverted,
                    "total_social_value": analytics.total_social_value,
                    "compliance_standards": analytics.compliance_standards,
                },
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "status": "error", "message": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn standards_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "success",
        "standards": {
            "ghg_protocol": {
                "name": "Greenhouse Gas Protocol",
                "purpose": "Standardized greenhouse gas accounting",
                "implementation": "Scope 3 avoided emissions calculation",
                "metrics": ["CO2", "CO2e", "Carbon Footprint"],
            },
            "iso_14040": {
                "name": "ISO 14040 Life Cycle Assessment",
                "purpose": "Environmental impact assessment throughout product lifecycle",
                "implementation": "Simplified LCA with cradle-to-grave boundary",
                "metrics": ["Global Warming Potential", "Water Use", "Resource Depletion"],
            },
            "circular_economy": {
                "name": "UNEP Circular Economy Principles",
                "purpose": "Transition from linear to circular economic models",
                "implementation": "Material circularity and waste prevention metrics",
                "principles": super::circular::CIRCULAR_ECONOMY_PRINCIPLES,
            },
        },
    }))
}

pub(crate) async fn reset_handler<L>(State(service): State<Arc<ImpactService<L>>>) -> Response
where
    L: ReportLog + 'static,
{
    match service.reset() {
        Ok(()) => {
            let payload = json!({ "status": "success", "message": "All data reset successfully" });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "status": "error", "message": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
