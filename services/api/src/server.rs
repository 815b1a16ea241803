use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryChecklistRepository, InMemoryConversationRepository,
    InMemorySubmissionRepository,
};
use crate::routes::with_api_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use finfinder::checklist::ChecklistService;
use finfinder::config::AppConfig;
use finfinder::conversation::ConversationService;
use finfinder::directory::DirectoryImporter;
use finfinder::error::AppError;
use finfinder::matching::MatchService;
use finfinder::telemetry;
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

    let directory = match config.directory.csv_path.as_deref() {
        Some(path) => Arc::new(DirectoryImporter::from_path(path)?),
        None => Arc::new(crate::infra::seed_directory()),
    };
    info!(lenders = directory.len(), "lender directory loaded");

    let match_service = Arc::new(MatchService::new(
        directory.clone(),
        Arc::new(InMemorySubmissionRepository::default()),
    ));
    let conversation_service = Arc::new(ConversationService::new(
        directory.clone(),
        Arc::new(InMemoryConversationRepository::default()),
    ));
    let checklist_service = Arc::new(ChecklistService::new(Arc::new(
        InMemoryChecklistRepository::default(),
    )));

    let app = with_api_routes(
        directory,
        match_service,
        conversation_service,
        checklist_service,
    )
    .layer(Extension(app_state))
    .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lender matching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
