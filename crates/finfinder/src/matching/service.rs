use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::directory::LenderRecord;

use super::form::QualificationForm;
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{
    MatchSummary, RepositoryError, SubmissionId, SubmissionRecord, SubmissionRepository,
};
use super::{match_lenders, MatchResult};

/// Service composing the intake guard, the lender directory, and the
/// submissions store.
pub struct MatchService<R> {
    guard: IntakeGuard,
    directory: Arc<Vec<LenderRecord>>,
    repository: Arc<R>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub-{id:06}"))
}

/// Outcome returned to the submitting client.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub submission_id: SubmissionId,
    pub matches: Vec<MatchResult>,
}

impl<R> MatchService<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn new(directory: Arc<Vec<LenderRecord>>, repository: Arc<R>) -> Self {
        Self {
            guard: IntakeGuard,
            directory,
            repository,
        }
    }

    /// Validate a qualification form and score it against the directory.
    ///
    /// The submission record is persisted on a best-effort basis: a storage
    /// failure is logged and the caller still receives the match list.
    pub fn submit(&self, form: QualificationForm) -> Result<MatchResponse, MatchServiceError> {
        self.guard.validate(&form)?;

        let matches = match_lenders(&form, &self.directory);
        let submission_id = next_submission_id();

        let record = SubmissionRecord {
            submission_id: submission_id.clone(),
            received_at: Utc::now(),
            matches: matches.iter().map(MatchSummary::from).collect(),
            form,
        };

        if let Err(error) = self.repository.insert(record) {
            warn!(%error, "qualification submission was not persisted");
        }

        Ok(MatchResponse {
            submission_id,
            matches,
        })
    }

    /// Fetch a stored submission for review.
    pub fn get(&self, submission_id: &SubmissionId) -> Result<SubmissionRecord, MatchServiceError> {
        let record = self
            .repository
            .fetch(submission_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Most recent submissions, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, MatchServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

impl From<&MatchResult> for MatchSummary {
    fn from(result: &MatchResult) -> Self {
        Self {
            lender_id: result.lender.id.clone(),
            lender_name: result.lender.name.clone(),
            match_score: result.match_score,
        }
    }
}

/// Error raised by the match service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
