use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::dto::search_dto::{SearchRequest, SearchResponse};
use crate::{error::Result, AppState};

pub async fn search_candidates(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>> {
    let Json(payload) = payload?;
    let query = payload.query.unwrap_or_default();
    let response = state.search_service.search(&query).await?;
    Ok(Json(response))
}
