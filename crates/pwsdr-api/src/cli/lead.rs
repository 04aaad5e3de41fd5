//! Lead listing and direct save commands.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use pwsdr_core::agent::tools::invoke_tool;
use pwsdr_types::lead::LeadRecord;
use pwsdr_types::tool::{SAVE_LEAD_TOOL, SaveLeadArgs};

use crate::state::AppState;

/// List all stored leads, oldest first.
pub async fn list_leads(state: &AppState, json: bool) -> Result<()> {
    let leads = state.lead_service.list_leads().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&leads)?);
        return Ok(());
    }

    if leads.is_empty() {
        println!();
        println!("  No leads captured yet.");
        println!(
            "  {}",
            style("Run `pwsdr chat` or `pwsdr save-lead` to capture one.").dim()
        );
        println!();
        return Ok(());
    }

    println!();
    println!("{}", leads_table(&leads));
    println!();
    println!(
        "  {} lead{}  {}",
        style(leads.len()).bold(),
        if leads.len() == 1 { "" } else { "s" },
        style(state.leads_path.display()).dim()
    );
    println!();
    Ok(())
}

fn leads_table(leads: &[LeadRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Saved").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Email").fg(Color::White),
        Cell::new("Role").fg(Color::White),
        Cell::new("Interest").fg(Color::White),
        Cell::new("Timeline").fg(Color::White),
    ]);

    let field = |value: &Option<String>| match value {
        Some(v) => Cell::new(v),
        None => Cell::new("-").fg(Color::DarkGrey),
    };

    for lead in leads {
        let timeline = match lead.timeline.as_deref() {
            Some("now") => Cell::new("now").fg(Color::Green),
            Some(other) => Cell::new(other),
            None => Cell::new("-").fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(lead.timestamp.format("%Y-%m-%d %H:%M")),
            field(&lead.name),
            field(&lead.email),
            field(&lead.role),
            field(&lead.interest),
            timeline,
        ]);
    }

    table
}

/// Call the `save_lead` tool with arguments given on the command line.
///
/// A store failure is returned as an error so the process exits non-zero.
pub async fn save_lead(state: &AppState, args: SaveLeadArgs, json: bool, quiet: bool) -> Result<()> {
    let output = invoke_tool(
        state.lead_service.as_ref(),
        SAVE_LEAD_TOOL,
        serde_json::to_value(&args)?,
    )
    .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !quiet {
        println!();
        println!("  {} {}", style("✓").green().bold(), output.message);
        println!(
            "  {}",
            style(format!("Stored in {}", state.leads_path.display())).dim()
        );
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn table_has_row_per_lead_and_marks_missing_fields() {
        let leads = vec![
            LeadRecord {
                timestamp: Utc::now(),
                name: Some("Asha".to_string()),
                email: None,
                role: Some("student".to_string()),
                interest: Some("NEET".to_string()),
                timeline: Some("now".to_string()),
            },
            LeadRecord {
                timestamp: Utc::now(),
                name: None,
                email: None,
                role: None,
                interest: None,
                timeline: None,
            },
        ];

        let table = leads_table(&leads);
        assert_eq!(table.row_iter().count(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("Asha"));
        assert!(rendered.contains("NEET"));
    }
}
