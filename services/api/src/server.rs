use crate::cli::ServeArgs;
use crate::infra::{load_directory, AppState, LandingState};
use crate::routes::with_landing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use partner_landing::config::AppConfig;
use partner_landing::error::AppError;
use partner_landing::telemetry;
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
    if let Some(path) = args.partners.take() {
        config.partners.data_path = path;
    }

    telemetry::init(&config.telemetry)?;

    let directory = load_directory(&config.partners.data_path)?;
    let landing_state = LandingState::with_tracing_sink(directory, &config.orders);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_landing_routes(landing_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        order_origin = %config.orders.origin,
        "partner landing service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
