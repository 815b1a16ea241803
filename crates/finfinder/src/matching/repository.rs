use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::form::QualificationForm;

/// Identifier wrapper for scored qualification submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Repository record keeping the form as submitted plus the match outcome
/// headline, so reviews can replay why a lender was suggested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub submission_id: SubmissionId,
    pub received_at: DateTime<Utc>,
    pub form: QualificationForm,
    pub matches: Vec<MatchSummary>,
}

/// Compact per-lender outcome stored with a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub lender_id: String,
    pub lender_name: String,
    pub match_score: u32,
}

/// Storage abstraction so the match service can be exercised in isolation.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError>;
}

/// Error enumeration for submission storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
