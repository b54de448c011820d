pub mod assets;
pub mod pages;
pub mod search;
pub mod server;


use axum::{routing::get, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::controller::Controller;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Build the application router / 构建路由
pub fn router(controller: Controller) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/api/search", get(search::search))
        .route("/api/status", get(server::load_status))
        .route("/api/health", get(server::health_check))
        .route("/api/version", get(server::version_info))
        // Embedded static files
        .fallback(assets::serve_embedded_file)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(controller)
}
