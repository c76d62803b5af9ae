use crate::cli::ServeArgs;
use crate::infra::{AppState, FileAuditSink};
use crate::routes::with_check_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use checklink::analysis::CheckService;
use checklink::config::AppConfig;
use checklink::error::AppError;
use checklink::telemetry;
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

    let audit = Arc::new(FileAuditSink::open(&config.audit.log_path)?);
    let service = Arc::new(CheckService::new(audit, Local::now().date_naive()));

    let app = with_check_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, audit_log = %config.audit.log_path.display(), "checklink ready");

    axum::serve(listener, app).await?;
    Ok(())
}
