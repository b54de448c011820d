use axum::{
    extract::{Query, State},
    Json,
};

use crate::api::ApiResponse;
use crate::controller::Controller;
use super::types::*;

/// GET /api/search - 搜索社论
pub async fn search(
    State(controller): State<Controller>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<SearchResponse>> {
    let raw_query = params.q.unwrap_or_default();
    let outcome = controller.search_records(&raw_query, &params.scope);

    let results: Vec<_> = outcome.records.into_iter().cloned().collect();
    Json(ApiResponse::success(SearchResponse {
        query: outcome.query,
        scope: params.scope,
        total: results.len(),
        results,
    }))
}
