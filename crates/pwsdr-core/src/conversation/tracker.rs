//! Per-session conversation state machine.
//!
//! A `Conversation` owns one `LeadDraft` and moves through
//! `Collecting -> Closing -> Saved`:
//!
//! - field updates overwrite draft values in `Collecting` and `Closing`
//! - an utterance containing a closing phrase moves `Collecting` to `Closing`
//!   and yields the spoken summary
//! - `save` flushes the draft through the lead service and ends in `Saved`;
//!   a failed save stays in `Closing` so it can be retried
//! - everything is rejected once `Saved`
//!
//! The dialogue itself is driven by the external LLM; this type only tracks
//! the mechanical parts.

use uuid::Uuid;

use pwsdr_types::content::FaqContent;
use pwsdr_types::conversation::{ConversationPhase, ConversationSnapshot, TurnReply};
use pwsdr_types::error::ConversationError;
use pwsdr_types::lead::{LeadDraft, LeadField, LeadRecord};

use crate::conversation::closing::is_closing;
use crate::faq::lookup;
use crate::repository::lead::LeadRepository;
use crate::service::lead::LeadService;

const DEFAULT_NAME: &str = "The user";
const DEFAULT_INTEREST: &str = "a PW course";
const DEFAULT_TIMELINE: &str = "soon";

/// One SDR conversation and its in-progress lead.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: Uuid,
    phase: ConversationPhase,
    draft: LeadDraft,
    turn_count: u32,
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_id(Uuid::now_v7())
    }

    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            phase: ConversationPhase::Collecting,
            draft: LeadDraft::default(),
            turn_count: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> ConversationPhase {
        self.phase
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    /// Number of user utterances handled so far.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    fn ensure_open(&self) -> Result<(), ConversationError> {
        if self.phase == ConversationPhase::Saved {
            return Err(ConversationError::AlreadySaved);
        }
        Ok(())
    }

    /// Overwrite one draft field. Any string is accepted.
    pub fn update(
        &mut self,
        field: LeadField,
        value: impl Into<String>,
    ) -> Result<(), ConversationError> {
        self.ensure_open()?;
        self.draft.set(field, value);
        tracing::debug!(session_id = %self.id, %field, "lead field updated");
        Ok(())
    }

    /// Like [`update`](Self::update) but with the field given by name.
    pub fn update_named(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), ConversationError> {
        let field: LeadField = field
            .parse()
            .map_err(|_| ConversationError::UnknownField(field.to_string()))?;
        self.update(field, value)
    }

    /// The read-back sentence spoken before saving.
    ///
    /// Unset fields fall back to "The user", "a PW course" and "soon".
    pub fn summarize(&self) -> String {
        let name = self.draft.name.as_deref().unwrap_or(DEFAULT_NAME);
        let interest = self.draft.interest.as_deref().unwrap_or(DEFAULT_INTEREST);
        let timeline = self.draft.timeline.as_deref().unwrap_or(DEFAULT_TIMELINE);

        format!(
            "Here's a quick summary. {name} is interested in {interest}. \
             They are planning to start {timeline}. I'll save this lead now."
        )
    }

    /// Enter `Closing` and return the summary. Idempotent while closing.
    pub fn begin_closing(&mut self) -> Result<String, ConversationError> {
        self.ensure_open()?;
        if self.phase == ConversationPhase::Collecting {
            self.phase = ConversationPhase::Closing;
            tracing::info!(session_id = %self.id, "conversation closing");
        }
        Ok(self.summarize())
    }

    /// React to one user utterance.
    ///
    /// A closing phrase yields the summary; anything else is answered from
    /// the FAQ (or the specialist fallback).
    pub fn handle_utterance(
        &mut self,
        text: &str,
        content: &FaqContent,
    ) -> Result<TurnReply, ConversationError> {
        self.ensure_open()?;
        self.turn_count += 1;

        if is_closing(text) {
            return self.begin_closing().map(TurnReply::Summary);
        }

        let found = lookup(text, content);
        let reply = if found.matched() {
            TurnReply::Answer(found.answer().to_string())
        } else {
            TurnReply::Fallback(found.answer().to_string())
        };
        tracing::debug!(
            session_id = %self.id,
            turn = self.turn_count,
            faq_hit = matches!(reply, TurnReply::Answer(_)),
            "utterance handled"
        );
        Ok(reply)
    }

    /// Flush the draft into a stored lead.
    ///
    /// Allowed from `Collecting` (passing through `Closing`) or `Closing`.
    pub async fn save<R: LeadRepository>(
        &mut self,
        leads: &LeadService<R>,
    ) -> Result<LeadRecord, ConversationError> {
        self.begin_closing()?;

        let record = leads.save_draft(self.draft.clone()).await?;
        self.phase = ConversationPhase::Saved;
        tracing::info!(session_id = %self.id, turns = self.turn_count, "conversation saved");
        Ok(record)
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot {
            id: self.id,
            phase: self.phase,
            draft: self.draft.clone(),
            turn_count: self.turn_count,
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
