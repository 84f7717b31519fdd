use crate::cli::ServeArgs;
use crate::infra::{load_archetypes, load_catalog, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use innovation_edu::config::AppConfig;
use innovation_edu::error::AppError;
use innovation_edu::recommend::RecommendationService;
use innovation_edu::telemetry;
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

    let catalog = Arc::new(load_catalog(&config.content)?);
    let archetypes = Arc::new(load_archetypes(&config.content)?);
    let service = Arc::new(RecommendationService::new(catalog.clone(), archetypes));

    let app = with_service_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        catalog_size = catalog.len(),
        "innovation education service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
