//! Tools the voice agent's LLM may call.
//!
//! There is one: `save_lead`. Its argument schema is generated from
//! `SaveLeadArgs` so the advertised schema and the parser cannot drift.

use pwsdr_types::error::ToolError;
use pwsdr_types::lead::LeadRecord;
use pwsdr_types::tool::{SAVE_LEAD_CONFIRMATION, SAVE_LEAD_TOOL, SaveLeadArgs, ToolDefinition};

use crate::repository::lead::LeadRepository;
use crate::service::lead::LeadService;

/// Result of a successful tool call.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ToolOutput {
    /// Text returned to the LLM.
    pub message: String,
    /// The lead that was written.
    pub record: LeadRecord,
}

/// JSON Schema for `SaveLeadArgs`.
fn save_lead_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(SaveLeadArgs);
    serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({ "type": "object" }))
}

/// Definition of the `save_lead` tool.
pub fn save_lead_definition() -> ToolDefinition {
    ToolDefinition {
        name: SAVE_LEAD_TOOL.to_string(),
        description: "Save the collected lead (name, email, role, interest, timeline) once the user is done talking.".to_string(),
        input_schema: save_lead_schema(),
    }
}

/// Every tool exposed to the agent.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![save_lead_definition()]
}

/// Dispatch a tool call by name with raw JSON arguments.
///
/// A save failure is returned as `ToolError::Failed` so the agent can tell
/// the user the lead was not saved.
pub async fn invoke_tool<R: LeadRepository>(
    leads: &LeadService<R>,
    name: &str,
    arguments: serde_json::Value,
) -> Result<ToolOutput, ToolError> {
    if name != SAVE_LEAD_TOOL {
        return Err(ToolError::UnknownTool(name.to_string()));
    }

    let args: SaveLeadArgs =
        serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
            tool: name.to_string(),
            reason: e.to_string(),
        })?;

    let record = leads
        .save_lead(args)
        .await
        .map_err(|source| ToolError::Failed {
            tool: name.to_string(),
            source,
        })?;

    tracing::info!(tool = name, "tool call completed");
    Ok(ToolOutput {
        message: SAVE_LEAD_CONFIRMATION.to_string(),
        record,
    })
}
