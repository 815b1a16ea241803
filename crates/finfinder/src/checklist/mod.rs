//! Document checklists: static per-product templates, the persisted checklist
//! a borrower works through, and the service tracking each document from
//! pending to verified.

mod domain;
mod repository;
pub mod router;
pub mod service;
pub mod templates;

pub use domain::{
    ChecklistDocument, ChecklistId, ChecklistRequest, ChecklistView, DocumentCategory,
    DocumentStatus, ReviewDecision, TransitionError,
};
pub use repository::{ChecklistRepository, RepositoryError};
pub use router::checklist_router;
pub use service::{ChecklistService, ChecklistServiceError, NewChecklist};
pub use templates::{generate_checklist, ChecklistProductType, DocumentTemplate};
