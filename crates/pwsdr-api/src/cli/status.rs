//! Deployment status command.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Show files, counts and the voice pipeline settings.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let leads = state.lead_service.list_leads().await?;
    let voice = &state.config.voice;

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "content_file": state.content_path.display().to_string(),
            "leads_file": state.leads_path.display().to_string(),
            "company": state.content.company.name,
            "faq_entries": state.content.faq.len(),
            "leads": leads.len(),
            "voice": voice,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} PW SDR agent v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    println!("  {}", style("── Content ──").dim());
    println!("  Company:     {}", style(&state.content.company.name).cyan());
    println!("  FAQ entries: {}", style(state.content.faq.len()).bold());
    println!();

    println!("  {}", style("── Leads ──").dim());
    println!("  Captured:    {}", style(leads.len()).bold());
    if let Some(last) = leads.last() {
        println!(
            "  Last saved:  {}",
            last.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    println!();

    println!("  {}", style("── Voice pipeline ──").dim());
    println!("  STT:         {}", voice.stt_model);
    println!("  LLM:         {}", voice.llm_model);
    println!("  TTS:         {} ({})", voice.tts_voice, voice.tts_style);
    println!("  Turns:       {}", voice.turn_detection);
    println!("  Noise:       {}", voice.noise_cancellation);
    println!(
        "  Preemptive:  {}",
        if voice.preemptive_generation { "on" } else { "off" }
    );
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir:    {}", style(state.data_dir.display()).dim());
    println!("  Content:     {}", style(state.content_path.display()).dim());
    println!("  Leads:       {}", style(state.leads_path.display()).dim());
    println!();

    Ok(())
}
