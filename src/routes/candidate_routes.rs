use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::dto::candidate_dto::{CreateCandidatePayload, CreateCandidateResponse};
use crate::models::candidate::Candidate;
use crate::{
    error::{Error, Result},
    AppState,
};

pub async fn register_candidate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateCandidatePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateCandidateResponse>)> {
    tracing::info!("Registering candidate request received");
    let Json(payload) = payload?;
    let new_candidate = payload.into_new_candidate()?;

    let candidate = state
        .candidate_service
        .create_candidate(new_candidate)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create candidate: {}", e);
            Error::Internal("Failed to register candidate".to_string())
        })?;

    tracing::info!(id = candidate.id, "Candidate registered");
    Ok((
        StatusCode::CREATED,
        Json(CreateCandidateResponse {
            message: "Candidate registered successfully".to_string(),
            id: candidate.id,
        }),
    ))
}

pub async fn list_candidates(State(state): State<AppState>) -> Result<Json<Vec<Candidate>>> {
    let candidates = state.candidate_service.list_candidates().await.map_err(|e| {
        tracing::error!("Failed to fetch candidates: {}", e);
        Error::Internal("Failed to fetch candidates".to_string())
    })?;
    Ok(Json(candidates))
}
