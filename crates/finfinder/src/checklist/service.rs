use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use super::domain::{
    ChecklistDocument, ChecklistId, ChecklistRequest, ReviewDecision, TransitionError,
};
use super::repository::{ChecklistRepository, RepositoryError};
use super::templates::generate_checklist;

/// Service expanding a product template into a persisted checklist and
/// walking each document through upload and review.
pub struct ChecklistService<R> {
    repository: Arc<R>,
}

static CHECKLIST_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_checklist_id() -> ChecklistId {
    let id = CHECKLIST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ChecklistId(format!("chk-{id:06}"))
}

/// Payload for opening a checklist after a lender and product have been
/// picked. `trade_counterparty` is optional; a missing or empty value is
/// stored as "Not specified".
#[derive(Debug, Clone, Deserialize)]
pub struct NewChecklist {
    pub qualification_form_id: String,
    pub lender_id: String,
    pub lender_name: String,
    pub product_type: String,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub trade_counterparty: Option<String>,
    pub company_name: String,
    pub country: String,
    pub industry: String,
}

impl<R> ChecklistService<R>
where
    R: ChecklistRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Expand the product template into a fresh checklist, every document
    /// pending, and persist it in display order.
    pub fn create(&self, new: NewChecklist) -> Result<ChecklistRequest, ChecklistServiceError> {
        let documents = generate_checklist(&new.product_type)
            .iter()
            .map(ChecklistDocument::from_template)
            .collect();

        let mut request = ChecklistRequest {
            checklist_id: next_checklist_id(),
            qualification_form_id: new.qualification_form_id,
            lender_id: new.lender_id,
            lender_name: new.lender_name,
            product_type: new.product_type,
            amount: new.amount,
            currency: new.currency,
            trade_counterparty: new
                .trade_counterparty
                .filter(|counterparty| !counterparty.is_empty())
                .unwrap_or_else(|| "Not specified".to_string()),
            company_name: new.company_name,
            country: new.country,
            industry: new.industry,
            generated_at: Utc::now(),
            documents,
        };
        request.sort_documents();

        Ok(self.repository.insert(request)?)
    }

    /// Fetch a stored checklist.
    pub fn get(&self, id: &ChecklistId) -> Result<ChecklistRequest, ChecklistServiceError> {
        let request = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(request)
    }

    /// Attach an uploaded file to one document and persist the new status.
    pub fn record_upload(
        &self,
        id: &ChecklistId,
        order_index: u32,
        file_url: String,
    ) -> Result<ChecklistRequest, ChecklistServiceError> {
        let mut request = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        request
            .document_mut(order_index)
            .ok_or(ChecklistServiceError::UnknownDocument(order_index))?
            .record_upload(file_url)?;
        self.repository.update(request.clone())?;
        Ok(request)
    }

    /// Settle the review of an uploaded document and persist the outcome.
    pub fn review(
        &self,
        id: &ChecklistId,
        order_index: u32,
        decision: ReviewDecision,
    ) -> Result<ChecklistRequest, ChecklistServiceError> {
        let mut request = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        request
            .document_mut(order_index)
            .ok_or(ChecklistServiceError::UnknownDocument(order_index))?
            .review(decision)?;
        self.repository.update(request.clone())?;
        Ok(request)
    }
}

/// Error raised by the checklist service.
#[derive(Debug, thiserror::Error)]
pub enum ChecklistServiceError {
    #[error("checklist has no document with order index {0}")]
    UnknownDocument(u32),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
