use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const GENDER_MALE: &str = "ذكر";
pub const GENDER_FEMALE: &str = "انثى";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub major: String,
    pub experience_years: i64,
    pub gender: String,
    pub city: String,
    pub cv_link: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A validated registration, ready to insert.
#[derive(Debug, Clone)]
pub struct NewCandidate {
    pub name: String,
    pub nationality: String,
    pub major: String,
    pub experience_years: i64,
    pub gender: String,
    pub city: String,
    pub cv_link: Option<String>,
}

/// Maps accepted spellings onto the two stored gender values.
pub fn normalize_gender(raw: &str) -> Option<&'static str> {
    match raw.trim() {
        GENDER_MALE => Some(GENDER_MALE),
        GENDER_FEMALE | "أنثى" => Some(GENDER_FEMALE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamza_spelling_normalizes_to_stored_value() {
        assert_eq!(normalize_gender("أنثى"), Some(GENDER_FEMALE));
        assert_eq!(normalize_gender(" ذكر "), Some(GENDER_MALE));
        assert_eq!(normalize_gender("Male"), None);
    }
}
