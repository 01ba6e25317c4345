use std::sync::Arc;

use crate::dto::search_dto::SearchResponse;
use crate::error::{Error, Result};
use crate::services::ai_service::QueryInterpreter;
use crate::services::candidate_service::CandidateService;
use crate::services::reply_classifier::{classify, ModelReply};

pub const UNRECOGNIZED_REPLY_MESSAGE: &str = "عذراً، لم أفهم طلبك. هل يمكنك توضيح ما تبحث عنه؟ مثلاً: \"ابي مهندس حاسب في الرياض بخبرة 3 سنوات\"";
pub const QUERY_FAILED_MESSAGE: &str = "حدث خطأ في البحث. يرجى إعادة صياغة طلبك بشكل أوضح.";

/// Natural-language candidate search: interpret, classify, execute.
#[derive(Clone)]
pub struct SearchService {
    interpreter: Arc<dyn QueryInterpreter>,
    candidate_service: CandidateService,
}

impl SearchService {
    pub fn new(interpreter: Arc<dyn QueryInterpreter>, candidate_service: CandidateService) -> Self {
        Self {
            interpreter,
            candidate_service,
        }
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::BadRequest("Query is required".to_string()));
        }
        tracing::info!("Received search query: {}", query);

        let raw = self.interpreter.interpret(query).await.map_err(|e| {
            tracing::error!(error = ?e, "Query interpretation failed");
            Error::Internal("Internal server error".to_string())
        })?;

        match classify(&raw) {
            ModelReply::Clarification(message) => {
                tracing::info!("Model asked for clarification");
                Ok(SearchResponse::clarification(message))
            }
            ModelReply::Unrecognized => {
                tracing::info!("Model reply was not recognized: {}", raw);
                Ok(SearchResponse::clarification(UNRECOGNIZED_REPLY_MESSAGE))
            }
            ModelReply::Query(sql) => match self.candidate_service.run_generated_query(&sql).await {
                Ok(candidates) => {
                    tracing::info!("Found {} candidates", candidates.len());
                    Ok(SearchResponse::Matches { candidates, sql })
                }
                Err(e) => {
                    tracing::warn!(error = %e, sql = %sql, "Generated query failed");
                    Ok(SearchResponse::clarification(QUERY_FAILED_MESSAGE))
                }
            },
        }
    }
}
