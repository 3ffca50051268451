use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryReportLog, InMemorySellerStore};
use crate::routes::with_scoring_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use recircle_core::config::AppConfig;
use recircle_core::error::AppError;
use recircle_core::scoring::impact::ImpactService;
use recircle_core::scoring::trust::ReviewService;
use recircle_core::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let impact_service = Arc::new(ImpactService::new(Arc::new(InMemoryReportLog::default())));
    let review_service = Arc::new(ReviewService::new(Arc::new(InMemorySellerStore::default())));

    let app = with_scoring_routes(impact_service, review_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "recircle scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
