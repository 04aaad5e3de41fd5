//! Tool-call types exchanged with the external LLM-driven agent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lead::LeadDraft;

/// Name of the lead capture tool as advertised to the LLM.
pub const SAVE_LEAD_TOOL: &str = "save_lead";

/// Confirmation string returned to the agent after a successful save.
pub const SAVE_LEAD_CONFIRMATION: &str = "Lead saved successfully ✔";

/// A callable tool as advertised to the language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema of the tool's argument object.
    pub input_schema: serde_json::Value,
}

/// Arguments of the `save_lead` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SaveLeadArgs {
    /// Full name of the prospect.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Role of the prospect, e.g. student or parent.
    pub role: String,
    /// Exam or course the prospect is interested in.
    pub interest: String,
    /// When they plan to start: now, soon or later.
    #[serde(default)]
    pub timeline: Option<String>,
}

impl From<SaveLeadArgs> for LeadDraft {
    fn from(args: SaveLeadArgs) -> Self {
        LeadDraft {
            name: Some(args.name),
            email: Some(args.email),
            role: Some(args.role),
            interest: Some(args.interest),
            timeline: args.timeline,
        }
    }
}
