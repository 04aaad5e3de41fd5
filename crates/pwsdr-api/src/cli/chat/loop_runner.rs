//! Console conversation loop.
//!
//! Drives one `Conversation` from greeting to saved lead. A closing phrase
//! reads the summary back and saves immediately, the way the voice agent
//! calls `save_lead` right after its summary. A failed save keeps the
//! conversation open in `Closing` so fields can be corrected and `/save`
//! retried.

use std::io::Write;

use console::style;
use rustyline_async::SharedWriter;
use tracing::info;

use pwsdr_core::agent::prompt::greeting;
use pwsdr_core::conversation::Conversation;
use pwsdr_types::conversation::{ConversationPhase, TurnReply};
use pwsdr_types::lead::{LeadDraft, LeadField};
use pwsdr_types::tool::SAVE_LEAD_CONFIRMATION;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

/// What the loop should do after handling a line.
enum Flow {
    Continue,
    End,
}

/// Run an interactive console session until saved, `/exit` or Ctrl+D.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let mut convo = Conversation::new();
    let session_id = convo.id().to_string();

    print_welcome_banner(
        &state.content.company.name,
        &greeting(&state.content),
        &state.config.voice.llm_model,
        &session_id,
    );
    info!(session_id = %session_id, "console session started");

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, mut out) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    let result = drive(state, &mut convo, &mut chat_input, &mut out).await;
    chat_input.finish();

    if convo.phase() != ConversationPhase::Saved {
        info!(session_id = %session_id, phase = %convo.phase(), "console session ended without a saved lead");
    }
    result
}

async fn drive(
    state: &AppState,
    convo: &mut Conversation,
    chat_input: &mut ChatInput,
    out: &mut SharedWriter,
) -> anyhow::Result<()> {
    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => {
                writeln!(out, "\n  {}", style("Session ended.").dim())?;
                return Ok(());
            }
            InputEvent::Interrupted => {
                writeln!(out, "\n  {}", style("Press Ctrl+D to exit, or keep talking.").dim())?;
                continue;
            }
            InputEvent::Message(text) if text.is_empty() => continue,
            InputEvent::Message(text) => text,
        };

        let flow = match commands::parse(&text) {
            Some(cmd) => run_command(state, convo, chat_input, out, cmd).await?,
            None => handle_utterance(state, convo, out, &text).await?,
        };

        if let Flow::End = flow {
            writeln!(out, "\n  {}", style("Session ended.").dim())?;
            return Ok(());
        }
    }
}

async fn run_command(
    state: &AppState,
    convo: &mut Conversation,
    chat_input: &mut ChatInput,
    out: &mut SharedWriter,
    cmd: ChatCommand,
) -> anyhow::Result<Flow> {
    match cmd {
        ChatCommand::Help => commands::print_help(out)?,
        ChatCommand::Clear => chat_input.clear(),
        ChatCommand::Exit => return Ok(Flow::End),
        ChatCommand::Draft => print_draft(out, convo.draft())?,
        ChatCommand::Summary => agent_says(out, &convo.summarize())?,
        ChatCommand::Save => return save(state, convo, out).await,
        ChatCommand::Set { field, value } => match convo.update_named(&field, value) {
            Ok(()) => {
                let draft = convo.draft();
                let shown = field
                    .parse::<LeadField>()
                    .ok()
                    .and_then(|f| draft.get(f))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "  {} {} = {}",
                    style("*").cyan().bold(),
                    style(field.to_lowercase()).bold(),
                    shown
                )?;
            }
            Err(e) => {
                let fields: Vec<String> = LeadField::ALL.iter().map(|f| f.to_string()).collect();
                writeln!(
                    out,
                    "  {} {e}. Fields: {}",
                    style("!").yellow().bold(),
                    fields.join(", ")
                )?;
            }
        },
        ChatCommand::Usage(usage) => commands::print_usage(out, &usage)?,
        ChatCommand::Unknown(name) => {
            writeln!(
                out,
                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                style("?").yellow().bold(),
                style(name).dim()
            )?;
        }
    }
    Ok(Flow::Continue)
}

async fn handle_utterance(
    state: &AppState,
    convo: &mut Conversation,
    out: &mut SharedWriter,
    text: &str,
) -> anyhow::Result<Flow> {
    let reply = convo.handle_utterance(text, &state.content)?;
    agent_says(out, reply.text())?;

    if let TurnReply::Summary(_) = reply {
        return save(state, convo, out).await;
    }
    Ok(Flow::Continue)
}

async fn save(
    state: &AppState,
    convo: &mut Conversation,
    out: &mut SharedWriter,
) -> anyhow::Result<Flow> {
    match convo.save(state.lead_service.as_ref()).await {
        Ok(_) => {
            writeln!(out, "  {} {}", style("✓").green().bold(), SAVE_LEAD_CONFIRMATION)?;
            Ok(Flow::End)
        }
        Err(e) => {
            writeln!(
                out,
                "  {} Lead was not saved: {e}. Fix the problem and /save again.",
                style("!").red().bold()
            )?;
            Ok(Flow::Continue)
        }
    }
}

fn agent_says(out: &mut SharedWriter, text: &str) -> std::io::Result<()> {
    writeln!(out, "\n  {} {}\n", style("Agent >").cyan().bold(), text)
}

fn print_draft(out: &mut impl Write, draft: &LeadDraft) -> std::io::Result<()> {
    writeln!(out)?;
    for field in LeadField::ALL {
        let value = match draft.get(field) {
            Some(v) => style(v.to_string()).bold(),
            None => style("-".to_string()).dim(),
        };
        writeln!(out, "  {:<9} {}", field.to_string(), value)?;
    }
    writeln!(out)
}
