use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::ApiResponse;
use crate::controller::Controller;
use crate::state::LoadStatus;

/// GET /api/health - 健康检查
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Editorial search is running"
    }))
}

/// 版本信息 / Version info
#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub build_time: &'static str,
}

/// GET /api/version - 版本信息
pub async fn version_info() -> Json<ApiResponse<VersionInfo>> {
    Json(ApiResponse::success(VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        build_time: env!("BUILD_TIME"),
    }))
}

/// GET /api/status - 数据加载状态
pub async fn load_status(State(controller): State<Controller>) -> Json<ApiResponse<LoadStatus>> {
    Json(ApiResponse::success(controller.status()))
}
