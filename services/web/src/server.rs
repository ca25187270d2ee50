use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ipl_insights::config::{AppConfig, DatasetConfig};
use ipl_insights::dashboard::DashboardState;
use ipl_insights::dataset::TableLoader;
use ipl_insights::error::AppError;
use ipl_insights::telemetry;
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
    if let Some(path) = args.dataset.take() {
        config.dataset = DatasetConfig { path };
    }

    telemetry::init(&config.telemetry)?;

    let loader = TableLoader::new(config.dataset.path.clone());
    let table = loader.load()?;
    let dashboard_state = DashboardState::new(table, config.dataset.source_label());

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_dashboard_routes(dashboard_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, dataset = %loader.path().display(), "ipl dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
