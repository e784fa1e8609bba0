use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_workflow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hr_automation::config::AppConfig;
use hr_automation::error::AppError;
use hr_automation::telemetry;
use hr_automation::workflows::compensation::CompensationChangeFormatter;
use hr_automation::workflows::onboarding::EmployeeAssembler;
use hr_automation::workflows::requisition::RequisitionAssembler;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let formatter = Arc::new(CompensationChangeFormatter::with_system_clock(
        config.notifications.clone(),
    ));
    let assembler = Arc::new(RequisitionAssembler::new(config.requisitions.clone()));
    let onboarding = Arc::new(EmployeeAssembler::with_system_clock(
        config.onboarding.clone(),
    ));

    let app = with_workflow_routes(formatter, assembler, onboarding)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        locale = ?config.notifications.locale,
        onboarding_sandbox = config.onboarding.sandbox,
        "hr automation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
