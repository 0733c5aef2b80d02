use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::dashboard_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use impact_dashboard::config::AppConfig;
use impact_dashboard::dashboard::{DashboardData, PageConfig};
use impact_dashboard::error::AppError;
use impact_dashboard::telemetry;
use std::sync::atomic::Ordering;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(variant) = args.variant.take() {
        config.dashboard.variant = variant;
    }

    telemetry::init(&config.telemetry)?;

    // Tables are literal, so a failure here is a build defect and stops startup.
    let data = DashboardData::standard();
    data.validate()?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(
        prometheus_handle,
        config.dashboard.variant,
        PageConfig::standard(),
        data,
    );
    let readiness_flag = app_state.readiness.clone();

    let app = dashboard_router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        variant = %config.dashboard.variant,
        "impact dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
