//! Print what the voice worker hands to its language model.

use anyhow::Result;
use console::style;

use pwsdr_core::agent::prompt::{build_instructions, greeting};
use pwsdr_core::agent::tools::tool_definitions;

use crate::state::AppState;

pub fn show_prompt(state: &AppState, json: bool) -> Result<()> {
    let instructions = build_instructions(&state.content);
    let tools = tool_definitions();

    if json {
        let out = serde_json::json!({
            "greeting": greeting(&state.content),
            "instructions": instructions,
            "tools": tools,
            "voice": state.config.voice,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("── Instructions ──").dim());
    println!();
    for line in instructions.lines() {
        println!("  {line}");
    }
    println!();
    println!("  {}", style("── Greeting ──").dim());
    println!("  {}", greeting(&state.content));
    println!();
    println!("  {}", style("── Tools ──").dim());
    for tool in &tools {
        println!("  {} {}", style(&tool.name).cyan().bold(), style(&tool.description).dim());
        let schema = serde_json::to_string_pretty(&tool.input_schema)?;
        for line in schema.lines() {
            println!("    {line}");
        }
    }
    println!();
    Ok(())
}
