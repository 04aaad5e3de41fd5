use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::lead::LeadDraft;

/// Lifecycle of a single SDR conversation.
///
/// - Collecting: lead fields are being elicited, questions answered from the FAQ
/// - Closing: the user signalled the end; summary read back, save pending
/// - Saved: the lead was written; terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationPhase {
    Collecting,
    Closing,
    Saved,
}

impl fmt::Display for ConversationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationPhase::Collecting => write!(f, "collecting"),
            ConversationPhase::Closing => write!(f, "closing"),
            ConversationPhase::Saved => write!(f, "saved"),
        }
    }
}

impl FromStr for ConversationPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collecting" => Ok(ConversationPhase::Collecting),
            "closing" => Ok(ConversationPhase::Closing),
            "saved" => Ok(ConversationPhase::Saved),
            other => Err(format!("invalid conversation phase: '{other}'")),
        }
    }
}

impl Default for ConversationPhase {
    fn default() -> Self {
        ConversationPhase::Collecting
    }
}

/// Serializable view of a conversation for the CLI and HTTP API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSnapshot {
    pub id: Uuid,
    pub phase: ConversationPhase,
    pub draft: LeadDraft,
    pub turn_count: u32,
}

/// What the agent should say back after one user utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum TurnReply {
    /// A canned FAQ answer.
    Answer(String),
    /// No FAQ entry matched; the specialist hand-off line.
    Fallback(String),
    /// A closing phrase was detected; the lead summary to read back.
    Summary(String),
}

impl TurnReply {
    pub fn text(&self) -> &str {
        match self {
            TurnReply::Answer(t) | TurnReply::Fallback(t) | TurnReply::Summary(t) => t,
        }
    }
}
