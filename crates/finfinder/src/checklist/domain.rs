use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::templates::DocumentTemplate;

/// Identifier wrapper for generated checklist requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChecklistId(pub String);

/// Document grouping used by the checklist templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentCategory {
    #[serde(rename = "KYC")]
    Kyc,
    Company,
    Trade,
    Financial,
    Collateral,
    Operational,
}

impl DocumentCategory {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentCategory::Kyc => "KYC",
            DocumentCategory::Company => "Company",
            DocumentCategory::Trade => "Trade",
            DocumentCategory::Financial => "Financial",
            DocumentCategory::Collateral => "Collateral",
            DocumentCategory::Operational => "Operational",
        }
    }

    /// Display groups sort by label text, so the order is alphabetical.
    pub(crate) const fn group_order(self) -> u8 {
        match self {
            DocumentCategory::Collateral => 0,
            DocumentCategory::Company => 1,
            DocumentCategory::Financial => 2,
            DocumentCategory::Kyc => 3,
            DocumentCategory::Operational => 4,
            DocumentCategory::Trade => 5,
        }
    }
}

/// Lifecycle of one tracked document.
///
/// `pending → uploaded → verified | rejected`; re-uploading returns an
/// uploaded or rejected document to `uploaded`, while a verified document is
/// frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Uploaded,
    Verified,
    Rejected,
}

/// Reviewer verdict on an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Verified,
    Rejected,
}

/// Invalid document state transition.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("document is already verified")]
    AlreadyVerified,
    #[error("document is not awaiting review")]
    NotAwaitingReview,
}

/// One tracked document of a checklist request: the template content plus the
/// upload state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistDocument {
    pub category: DocumentCategory,
    pub document_name: String,
    pub document_description: String,
    pub why_needed: String,
    pub how_to_prepare: String,
    pub alternatives: Option<String>,
    pub is_required: bool,
    pub order_index: u32,
    pub status: DocumentStatus,
    pub file_url: Option<String>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl ChecklistDocument {
    pub(crate) fn from_template(template: &DocumentTemplate) -> Self {
        Self {
            category: template.category,
            document_name: template.document_name.to_string(),
            document_description: template.document_description.to_string(),
            why_needed: template.why_needed.to_string(),
            how_to_prepare: template.how_to_prepare.to_string(),
            alternatives: template.alternatives.map(str::to_string),
            is_required: template.is_required,
            order_index: template.order_index,
            status: DocumentStatus::Pending,
            file_url: None,
            uploaded_at: None,
        }
    }

    /// Attach an uploaded file. Allowed from every state except `verified`,
    /// so a rejected document can be replaced.
    pub(crate) fn record_upload(&mut self, file_url: String) -> Result<(), TransitionError> {
        if self.status == DocumentStatus::Verified {
            return Err(TransitionError::AlreadyVerified);
        }
        self.status = DocumentStatus::Uploaded;
        self.file_url = Some(file_url);
        self.uploaded_at = Some(Utc::now());
        Ok(())
    }

    /// Apply a reviewer verdict. Only an `uploaded` document can be reviewed.
    pub(crate) fn review(&mut self, decision: ReviewDecision) -> Result<(), TransitionError> {
        if self.status != DocumentStatus::Uploaded {
            return Err(TransitionError::NotAwaitingReview);
        }
        self.status = match decision {
            ReviewDecision::Verified => DocumentStatus::Verified,
            ReviewDecision::Rejected => DocumentStatus::Rejected,
        };
        Ok(())
    }

    fn counts_as_complete(&self) -> bool {
        matches!(
            self.status,
            DocumentStatus::Uploaded | DocumentStatus::Verified
        )
    }
}

/// One generated, trackable document set tied to a lender, product, and
/// qualification form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistRequest {
    pub checklist_id: ChecklistId,
    pub qualification_form_id: String,
    pub lender_id: String,
    pub lender_name: String,
    pub product_type: String,
    pub amount: f64,
    pub currency: String,
    pub trade_counterparty: String,
    pub company_name: String,
    pub country: String,
    pub industry: String,
    pub generated_at: DateTime<Utc>,
    pub documents: Vec<ChecklistDocument>,
}

impl ChecklistRequest {
    /// Rounded percentage of required documents uploaded or verified.
    /// Optional documents never move the number.
    pub fn progress(&self) -> u8 {
        let required = self
            .documents
            .iter()
            .filter(|document| document.is_required)
            .count();
        if required == 0 {
            return 0;
        }
        let complete = self
            .documents
            .iter()
            .filter(|document| document.is_required && document.counts_as_complete())
            .count();
        ((complete as f64 / required as f64) * 100.0).round() as u8
    }

    /// Documents sort by category group, then by template order within the
    /// group. The stored order is the display order.
    pub(crate) fn sort_documents(&mut self) {
        self.documents
            .sort_by_key(|document| (document.category.group_order(), document.order_index));
    }

    pub(crate) fn document_mut(&mut self, order_index: u32) -> Option<&mut ChecklistDocument> {
        self.documents
            .iter_mut()
            .find(|document| document.order_index == order_index)
    }

    /// Wire view: the record plus its computed progress.
    pub fn view(&self) -> ChecklistView {
        ChecklistView {
            progress: self.progress(),
            request: self.clone(),
        }
    }
}

/// Response shape for checklist endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistView {
    #[serde(flatten)]
    pub request: ChecklistRequest,
    pub progress: u8,
}
