//! Welcome banner for console sessions.

use console::style;

pub fn print_welcome_banner(company: &str, greeting: &str, llm_model: &str, session_id: &str) {
    println!();
    println!("  {} {}", style("☎").bold(), style(company).cyan().bold());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!(
        "  {}  {}",
        style("Voice LLM:").bold(),
        style(llm_model).dim()
    );
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
    println!("  {} {}", style("Agent >").cyan().bold(), greeting);
    println!();
}
