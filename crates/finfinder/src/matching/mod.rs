//! Qualification matching: the intake form, the additive scoring rules, and
//! the submission service with its HTTP surface. The reduced single-winner
//! scorer behind the guided assistant lives in [`conversational`].

pub mod conversational;
pub mod form;
mod intake;
mod repository;
mod rules;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use form::QualificationForm;
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{
    MatchSummary, RepositoryError, SubmissionId, SubmissionRecord, SubmissionRepository,
};
pub use router::match_router;
pub use service::{MatchResponse, MatchService, MatchServiceError};

use crate::directory::LenderRecord;
use serde::{Deserialize, Serialize};

/// One qualified lender with its score and the reasons that earned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub lender: LenderRecord,
    pub match_score: u32,
    pub match_reasons: Vec<String>,
}

/// Score every lender in the directory against the qualification answers.
///
/// Only lenders with a positive score qualify. Results are sorted by score
/// descending; equal scores keep directory order.
pub fn match_lenders(form: &QualificationForm, directory: &[LenderRecord]) -> Vec<MatchResult> {
    let mut matches = Vec::new();

    for lender in directory {
        let (score, reasons) = rules::score_lender(form, lender);
        if score > 0 {
            matches.push(MatchResult {
                lender: lender.clone(),
                match_score: score,
                match_reasons: reasons,
            });
        }
    }

    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches
}
