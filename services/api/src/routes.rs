use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use recircle_core::scoring::impact::{impact_router, ImpactService, ReportLog};
use recircle_core::scoring::trust::{trust_router, ReviewService, SellerStore};
use serde_json::json;
use std::sync::Arc;

/// Assemble the full application router: both scoring pipelines plus the
/// operational endpoints.
pub(crate) fn with_scoring_routes<L, S>(
    impact: Arc<ImpactService<L>>,
    trust: Arc<ReviewService<S>>,
) -> axum::Router
where
    L: ReportLog + 'static,
    S: SellerStore + 'static,
{
    impact_router(impact)
        .merge(trust_router(trust))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ping", axum::routing::get(ping))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "message": "pong", "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryReportLog, InMemorySellerStore};
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    fn app() -> axum::Router {
        let impact = Arc::new(ImpactService::new(Arc::new(InMemoryReportLog::default())));
        let trust = Arc::new(ReviewService::new(Arc::new(InMemorySellerStore::default())));
        with_scoring_routes(impact, trust)
    }

    #[tokio::test]
    async fn healthcheck_is_ok() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ping_answers_pong() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(payload["message"], "pong");
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn both_pipelines_are_mounted() {
        let calculate = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate-impact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"category":"Food","quantity_kg":1.0}"#))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(calculate.status(), StatusCode::OK);

        let seller = app()
            .oneshot(
                Request::builder()
                    .uri("/seller/unknown")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(seller.status(), StatusCode::NOT_FOUND);
    }
}
