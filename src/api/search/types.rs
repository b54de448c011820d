use serde::{Deserialize, Serialize};

use crate::models::Editorial;

/// 搜索请求参数 / Search query parameters
///
/// A missing `q` means no search was triggered.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_scope() -> String {
    "all".to_string()
}

/// 搜索响应 / Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Normalized query / 规范化后的查询词
    pub query: String,
    pub scope: String,
    pub total: usize,
    pub results: Vec<Editorial>,
}
