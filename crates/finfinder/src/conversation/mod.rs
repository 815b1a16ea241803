//! Guided assistant conversations: the linear step machine, the persisted
//! session record, and the service that walks an applicant from greeting to a
//! single best-match lender with a quick document checklist.

mod repository;
pub mod router;
pub mod service;
mod steps;

pub use repository::{
    ConversationId, ConversationMessage, ConversationRecord, ConversationRepository,
    ConversationStatus, MessageRole, RepositoryError,
};
pub use router::conversation_router;
pub use service::{ConversationReply, ConversationService, ConversationServiceError};
pub use steps::ConversationStep;
