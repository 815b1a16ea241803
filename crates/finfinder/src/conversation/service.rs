use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::directory::LenderRecord;
use crate::matching::conversational::{
    best_match, quick_checklist, ConversationAnswers, QuickDocument,
};
use crate::matching::MatchResult;

use super::repository::{
    ConversationId, ConversationRecord, ConversationRepository, ConversationStatus, MessageRole,
    RepositoryError,
};
use super::steps::ConversationStep;

/// Session flow for the guided assistant: one persisted record per
/// conversation, advanced one user message at a time. Unlike qualification
/// intake, persistence here is load-bearing; later turns replay the stored
/// machine position, so storage failures fail the turn.
pub struct ConversationService<R> {
    directory: Arc<Vec<LenderRecord>>,
    repository: Arc<R>,
}

static CONVERSATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_conversation_id() -> ConversationId {
    let id = CONVERSATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ConversationId(format!("conv-{id:06}"))
}

/// What the assistant says back after a turn. `matched_lender` is filled on
/// the closing turn only, so clients can link to the lender's site.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationReply {
    pub conversation_id: ConversationId,
    pub step: ConversationStep,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_lender: Option<MatchResult>,
}

impl<R> ConversationService<R>
where
    R: ConversationRepository + 'static,
{
    pub fn new(directory: Arc<Vec<LenderRecord>>, repository: Arc<R>) -> Self {
        Self {
            directory,
            repository,
        }
    }

    /// Open a session and return the greeting question.
    pub fn start(&self) -> Result<ConversationReply, ConversationServiceError> {
        let step = ConversationStep::first();
        let greeting = step.prompt().unwrap_or_default();

        let mut record = ConversationRecord {
            conversation_id: next_conversation_id(),
            started_at: Utc::now(),
            current_step: step,
            status: ConversationStatus::Active,
            answers: ConversationAnswers::default(),
            matched_lender_id: None,
            matched_lender_name: None,
            transcript: Vec::new(),
        };
        record.push_message(MessageRole::Assistant, greeting);

        let reply = ConversationReply {
            conversation_id: record.conversation_id.clone(),
            step,
            message: greeting.to_string(),
            matched_lender: None,
        };
        self.repository.insert(record)?;
        Ok(reply)
    }

    /// Record one user answer and advance the machine.
    ///
    /// The answer is stored under the step that asked for it. After the final
    /// question the matcher runs once and the closing message (match briefing
    /// or the no-match text) comes back; any turn after that is refused.
    pub fn reply(
        &self,
        id: &ConversationId,
        message: &str,
    ) -> Result<ConversationReply, ConversationServiceError> {
        let text = message.trim();
        if text.is_empty() {
            return Err(ConversationServiceError::EmptyMessage);
        }

        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        if record.status == ConversationStatus::Completed {
            return Err(ConversationServiceError::Concluded);
        }

        record.push_message(MessageRole::User, text);
        record.record_answer(text);

        let reply = match record.current_step.next() {
            ConversationStep::Matching | ConversationStep::Results => self.conclude(&mut record),
            step => {
                record.current_step = step;
                let prompt = step.prompt().unwrap_or_default();
                record.push_message(MessageRole::Assistant, prompt);
                ConversationReply {
                    conversation_id: record.conversation_id.clone(),
                    step,
                    message: prompt.to_string(),
                    matched_lender: None,
                }
            }
        };

        self.repository.update(record)?;
        Ok(reply)
    }

    /// Fetch a stored session, transcript included.
    pub fn get(&self, id: &ConversationId) -> Result<ConversationRecord, ConversationServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    fn conclude(&self, record: &mut ConversationRecord) -> ConversationReply {
        let outcome = best_match(&record.answers, &self.directory);

        record.current_step = ConversationStep::Results;
        record.status = ConversationStatus::Completed;

        let message = match &outcome {
            Some(result) => {
                record.matched_lender_id = Some(result.lender.id.clone());
                record.matched_lender_name = Some(result.lender.name.clone());
                matched_message(result, &quick_checklist(&record.answers))
            }
            None => NO_MATCH_MESSAGE.to_string(),
        };
        record.push_message(MessageRole::Assistant, message.clone());

        ConversationReply {
            conversation_id: record.conversation_id.clone(),
            step: ConversationStep::Results,
            message,
            matched_lender: outcome,
        }
    }
}

const NO_MATCH_MESSAGE: &str = "I couldn't find a perfect match in our current database, \
     but don't worry! Please contact our team directly, and we'll help you find the right \
     financing institution for your needs.";

/// Closing briefing for a successful match. Sections without content (no
/// reasons, no website) collapse to nothing, matching the chat rendering.
fn matched_message(result: &MatchResult, documents: &[QuickDocument]) -> String {
    let reasons = if result.match_reasons.is_empty() {
        String::new()
    } else {
        let bullets: Vec<String> = result
            .match_reasons
            .iter()
            .map(|reason| format!("• {reason}"))
            .collect();
        format!("**Why this lender:**\n{}", bullets.join("\n"))
    };

    let checklist: Vec<String> = documents
        .iter()
        .enumerate()
        .map(|(position, document)| {
            format!("{}. **{}** - {}", position + 1, document.name, document.reason)
        })
        .collect();

    let website = result
        .lender
        .website
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| format!("\n**Ready to apply?**\nVisit their website: {url}"))
        .unwrap_or_default();

    format!(
        "Perfect! Based on your information, I've found the best match for you:\n\n\
         **{}**\nMatch Score: {}%\n\n{}\n\n**Documents you'll need:**\n{}\n\n{}\n\n\
         I'm here if you have any questions about the application process!",
        result.lender.name,
        result.match_score,
        reasons,
        checklist.join("\n"),
        website
    )
}

/// Error raised by the conversation service.
#[derive(Debug, thiserror::Error)]
pub enum ConversationServiceError {
    #[error("message text was empty")]
    EmptyMessage,
    #[error("conversation has already concluded")]
    Concluded,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_message_lists_reasons_documents_and_website() {
        let mut lender = LenderRecord::new("lender-001", "Harbor Trade Bank");
        lender.website = Some("https://harbor.example".to_string());
        let result = MatchResult {
            lender,
            match_score: 75,
            match_reasons: vec!["Operates in your country".to_string()],
        };
        let documents = [QuickDocument {
            name: "Business Plan",
            reason: "Explains use of funds",
        }];

        let message = matched_message(&result, &documents);
        assert!(message.starts_with("Perfect! Based on your information"));
        assert!(message.contains("**Harbor Trade Bank**\nMatch Score: 75%"));
        assert!(message.contains("**Why this lender:**\n• Operates in your country"));
        assert!(message.contains("1. **Business Plan** - Explains use of funds"));
        assert!(message.contains("**Ready to apply?**\nVisit their website: https://harbor.example"));
        assert!(message.ends_with("I'm here if you have any questions about the application process!"));
    }

    #[test]
    fn closing_message_drops_empty_sections() {
        let result = MatchResult {
            lender: LenderRecord::new("lender-002", "Quiet Capital"),
            match_score: 15,
            match_reasons: Vec::new(),
        };

        let message = matched_message(&result, &[]);
        assert!(!message.contains("**Why this lender:**"));
        assert!(!message.contains("**Ready to apply?**"));
    }
}
