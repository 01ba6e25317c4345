use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
}

/// Body of a successful search: either matching rows or a follow-up question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Matches {
        candidates: Vec<Candidate>,
        sql: String,
    },
    Clarification {
        clarification_needed: String,
    },
}

impl SearchResponse {
    pub fn clarification(message: impl Into<String>) -> Self {
        SearchResponse::Clarification {
            clarification_needed: message.into(),
        }
    }
}
