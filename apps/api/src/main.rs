//! Gatekeep API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod dto;
mod error;
mod handlers;
mod state;

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use gatekeep_application::{AccessService, DirectoryService, IntentClassifier};
use gatekeep_core::AppError;
use gatekeep_infrastructure::InMemoryDirectoryRepository;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api_config::ApiConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load();

    let repository = Arc::new(InMemoryDirectoryRepository::new());

    let classifier = Arc::new(IntentClassifier::with_embedded_corpus());
    info!(
        vocabulary = classifier.vocabulary_size(),
        labels = classifier.label_count(),
        "intent model trained"
    );

    let app_state = AppState {
        access_service: AccessService::new(repository.clone(), classifier),
        directory_service: DirectoryService::new(repository),
    };

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/users", post(handlers::directory::create_user_handler))
        .route("/roles", post(handlers::directory::create_role_handler))
        .route(
            "/permissions",
            post(handlers::directory::create_permission_handler),
        )
        .route(
            "/users/{username}/roles",
            post(handlers::directory::assign_role_handler),
        )
        .route(
            "/roles/{role_name}/permissions",
            post(handlers::directory::assign_permission_handler),
        )
        .route("/check_access", post(handlers::access::check_access_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let host = IpAddr::from_str(&config.api_host).map_err(|error| {
        AppError::Internal(format!("invalid API_HOST '{}': {error}", config.api_host))
    })?;
    let address = SocketAddr::from((host, config.api_port));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "gatekeep-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
