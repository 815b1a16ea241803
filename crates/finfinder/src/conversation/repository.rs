use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::conversational::ConversationAnswers;

use super::steps::ConversationStep;

/// Identifier wrapper for assistant conversations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    Assistant,
    User,
}

/// One transcript line, tagged with the step it was sent under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: MessageRole,
    pub message: String,
    pub step: ConversationStep,
    pub sent_at: DateTime<Utc>,
}

/// Repository record for one assistant session: the machine position, the
/// answers collected so far, the match outcome once reached, and the full
/// transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub conversation_id: ConversationId,
    pub started_at: DateTime<Utc>,
    pub current_step: ConversationStep,
    pub status: ConversationStatus,
    pub answers: ConversationAnswers,
    pub matched_lender_id: Option<String>,
    pub matched_lender_name: Option<String>,
    pub transcript: Vec<ConversationMessage>,
}

impl ConversationRecord {
    /// Store an answer under the step that asked for it. The non-askable
    /// states have no slot and ignore the text.
    pub(crate) fn record_answer(&mut self, answer: &str) {
        let slot = match self.current_step {
            ConversationStep::BusinessName => &mut self.answers.business_name,
            ConversationStep::BusinessType => &mut self.answers.business_type,
            ConversationStep::Country => &mut self.answers.country,
            ConversationStep::YearsOperation => &mut self.answers.years_operation,
            ConversationStep::AnnualRevenue => &mut self.answers.annual_revenue,
            ConversationStep::FundingType => &mut self.answers.funding_type,
            ConversationStep::FundingAmount => &mut self.answers.funding_amount,
            ConversationStep::FundingPurpose => &mut self.answers.funding_purpose,
            ConversationStep::HasFinancials => &mut self.answers.has_financials,
            ConversationStep::TradeInvolved => &mut self.answers.trade_involved,
            ConversationStep::Matching | ConversationStep::Results => return,
        };
        *slot = Some(answer.to_string());
    }

    pub(crate) fn push_message(&mut self, role: MessageRole, message: impl Into<String>) {
        self.transcript.push(ConversationMessage {
            role,
            message: message.into(),
            step: self.current_step,
            sent_at: Utc::now(),
        });
    }
}

/// Storage abstraction so the conversation service can be exercised in
/// isolation.
pub trait ConversationRepository: Send + Sync {
    fn insert(&self, record: ConversationRecord) -> Result<ConversationRecord, RepositoryError>;
    fn update(&self, record: ConversationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ConversationId) -> Result<Option<ConversationRecord>, RepositoryError>;
}

/// Error enumeration for conversation storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
