use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    clients::{health::HealthChecker, rbmq::RabbitMqPublisher},
    config::Config,
    error::ApiError,
    mapper::map_request,
    models::{health::HealthStatus, message::NotificationRequest},
};

pub struct AppState {
    publisher: RabbitMqPublisher,
    health_checker: HealthChecker,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            publisher: RabbitMqPublisher::new(config),
            health_checker: HealthChecker::new(config.clone()),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/products", post(submit_product))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(&config));
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Notification gateway started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn submit_product(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NotificationRequest>,
) -> Result<StatusCode, ApiError> {
    let envelope = map_request(&request)?;

    info!(
        message_id = %envelope.id,
        channel = %envelope.channel,
        recipients = envelope.users.len(),
        queue = %envelope.queue_name(),
        "Queueing notification message"
    );

    state.publisher.publish(&envelope).await?;

    Ok(StatusCode::CREATED)
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all().await;

    let status_code = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}
