pub mod api;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::{DbManager, DbManagerError};
use crate::task::web::create_task_router;

/// State shared by every router: the data-access manager.
#[derive(Clone, Debug)]
pub struct TrackerState {
    pub db: DbManager,
}

/// Custom error type for web handler operations.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Represents an error during template rendering.
    /// The specific `askama::Error` is captured as the source of this error.
    #[error("Template rendering failed")]
    Template(#[from] askama::Error),
    /// Represents a failure reported by the data-access layer.
    #[error("Database operation failed")]
    Database(#[from] DbManagerError),
}

impl axum::response::IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = ?self, "Request failed");
        let user_facing_error_message =
            "An unexpected error occurred while processing your request. Please try again later.";
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!(
                "<h1>Internal Server Error</h1><p>{}</p>",
                user_facing_error_message
            )),
        )
            .into_response()
    }
}

/// Builds the full application router: HTML pages, the JSON API and the
/// health check.
pub fn create_router(db: DbManager) -> Router {
    let state = Arc::new(TrackerState { db });

    Router::new()
        .route("/health", axum::routing::get(health_check_handler))
        .merge(create_task_router(state.clone()))
        .merge(api::create_api_router(state))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    let db = DbManager::from_config(&config);
    db.initialize_schema().await?;
    tracing::info!("Database schema initialized");

    let server_address = format!("0.0.0.0:{}", &config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    axum::serve(listener, create_router(db)).await?;
    Ok(())
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}
