//! FAQ lookup and listing commands.

use anyhow::Result;
use console::style;

use pwsdr_core::faq::lookup;

use crate::state::AppState;

/// Answer `query` from the FAQ, or print the specialist fallback.
pub fn ask(state: &AppState, query: &str, json: bool) -> Result<()> {
    let found = lookup(query, &state.content);
    let answer = found.answer();

    if json {
        let out = serde_json::json!({
            "query": query,
            "matched": found.matched(),
            "question": found.entry.map(|e| e.question.as_str()),
            "answer": answer,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    match found.entry {
        Some(e) => {
            println!("  {} {}", style("Q:").dim(), style(&e.question).dim());
            println!("  {} {}", style("A:").green().bold(), answer);
        }
        None => {
            println!("  {} {}", style("?").yellow().bold(), answer);
        }
    }
    println!();
    Ok(())
}

/// Print the company profile followed by every FAQ entry in document order.
pub fn list_faq(state: &AppState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(state.content.as_ref())?);
        return Ok(());
    }

    let company = &state.content.company;
    println!();
    println!("  {}", style(&company.name).cyan().bold());
    println!("  {}", style(&company.description).dim());
    println!("  {} {}", style("Mission:").bold(), company.mission);
    println!();

    for (i, entry) in state.content.faq.iter().enumerate() {
        println!("  {}. {}", i + 1, style(&entry.question).bold());
        println!("     {}", entry.answer);
    }
    println!();
    println!(
        "  {}",
        style(format!("Source: {}", state.content_path.display())).dim()
    );
    println!();
    Ok(())
}
