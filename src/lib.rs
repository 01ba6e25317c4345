pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use crate::services::{
    ai_service::QueryInterpreter, candidate_service::CandidateService,
    search_service::SearchService,
};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub candidate_service: CandidateService,
    pub search_service: SearchService,
}

impl AppState {
    pub fn new(pool: SqlitePool, interpreter: Arc<dyn QueryInterpreter>) -> Self {
        let candidate_service = CandidateService::new(pool);
        let search_service = SearchService::new(interpreter, candidate_service.clone());

        Self {
            candidate_service,
            search_service,
        }
    }
}
