use super::domain::{ChecklistId, ChecklistRequest};

/// Storage abstraction so the checklist service can be exercised in
/// isolation.
pub trait ChecklistRepository: Send + Sync {
    fn insert(&self, request: ChecklistRequest) -> Result<ChecklistRequest, RepositoryError>;
    fn update(&self, request: ChecklistRequest) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ChecklistId) -> Result<Option<ChecklistRequest>, RepositoryError>;
}

/// Error enumeration for checklist storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
