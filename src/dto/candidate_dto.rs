use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::candidate::{normalize_gender, NewCandidate};

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required except cv_link";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateCandidatePayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub nationality: Option<String>,
    #[validate(required, length(min = 1))]
    pub major: Option<String>,
    #[validate(required, range(min = 0))]
    pub experience_years: Option<i64>,
    #[validate(required, length(min = 1))]
    pub gender: Option<String>,
    #[validate(required, length(min = 1))]
    pub city: Option<String>,
    pub cv_link: Option<String>,
}

impl CreateCandidatePayload {
    /// Validates the payload and converts it into an insertable record.
    pub fn into_new_candidate(self) -> Result<NewCandidate> {
        self.validate().map_err(|e| {
            tracing::debug!("Candidate payload rejected: {}", e);
            Error::BadRequest(MISSING_FIELDS_MESSAGE.into())
        })?;

        let gender = self.gender.as_deref().unwrap_or_default();
        let gender = normalize_gender(gender)
            .ok_or_else(|| Error::BadRequest(format!("Unsupported gender value: {}", gender)))?;

        Ok(NewCandidate {
            name: required_text(self.name)?,
            nationality: required_text(self.nationality)?,
            major: required_text(self.major)?,
            experience_years: self
                .experience_years
                .ok_or_else(|| Error::BadRequest(MISSING_FIELDS_MESSAGE.into()))?,
            gender: gender.to_string(),
            city: required_text(self.city)?,
            cv_link: self
                .cv_link
                .map(|link| link.trim().to_string())
                .filter(|link| !link.is_empty()),
        })
    }
}

fn required_text(value: Option<String>) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::BadRequest(MISSING_FIELDS_MESSAGE.into()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCandidateResponse {
    pub message: String,
    pub id: i64,
}
