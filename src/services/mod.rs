pub mod ai_service;
pub mod candidate_service;
pub mod reply_classifier;
pub mod search_service;
