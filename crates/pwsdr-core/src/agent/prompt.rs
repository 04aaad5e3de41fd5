//! Instructions handed to the voice agent's language model.
//!
//! The prompt is rendered from the loaded content so the company name and
//! the FAQ the model may quote always match what the matcher answers from.
//!
//! Layout:
//! ```text
//! <company>name, description, mission</company>
//! <faq>Q/A pairs in document order</faq>
//! <instructions>goals, answering rules, lead memory, closing</instructions>
//! ```

use pwsdr_types::content::{FALLBACK_ANSWER, FaqContent};
use pwsdr_types::tool::SAVE_LEAD_TOOL;

use crate::conversation::closing::CLOSING_PHRASES;

/// Render the full SDR instructions for `content`.
pub fn build_instructions(content: &FaqContent) -> String {
    let company = &content.company;
    let mut sections = Vec::with_capacity(3);

    sections.push(format!(
        "<company>\nName: {}\nAbout: {}\nMission: {}\n</company>",
        company.name, company.description, company.mission
    ));

    let faq_lines: Vec<String> = content
        .faq
        .iter()
        .map(|entry| format!("Q: {}\nA: {}", entry.question, entry.answer))
        .collect();
    sections.push(format!("<faq>\n{}\n</faq>", faq_lines.join("\n\n")));

    let closing = CLOSING_PHRASES
        .iter()
        .map(|p| format!("\"{p}\""))
        .collect::<Vec<_>>()
        .join(", ");

    sections.push(format!(
        "<instructions>\n\
        You are a friendly SDR for {name}.\n\
        \n\
        GOALS:\n\
        1. Greet warmly.\n\
        2. Answer questions ONLY using the FAQ above.\n\
        3. Collect lead details naturally: name, email, role, exam/course interest, timeline (now / soon / later).\n\
        4. When the user says anything like {closing}:\n\
        \x20  - Stop asking questions\n\
        \x20  - Give a short verbal summary of the lead\n\
        \x20  - Then call the {tool} tool with the collected data\n\
        \n\
        ANSWERING RULES:\n\
        - If the answer is not in the FAQ, say: \"{fallback}\"\n\
        - Keep answers short, conversational, and helpful.\n\
        \n\
        LEAD MEMORY (keep track while talking): lead_name, lead_email, lead_role, lead_interest, lead_timeline.\n\
        \n\
        When the conversation ends, say something like:\n\
        \"Here's a quick summary. <NAME> is interested in <INTEREST>. They're planning to start <TIMELINE>. Saving this now.\"\n\
        Then call {tool}.\n\
        </instructions>",
        name = company.name,
        tool = SAVE_LEAD_TOOL,
        fallback = FALLBACK_ANSWER,
    ));

    sections.join("\n\n")
}

/// Opening line the agent speaks when a session starts.
pub fn greeting(content: &FaqContent) -> String {
    format!(
        "Hi! Thanks for reaching out to {}. I can answer questions about our courses. May I know your name?",
        content.company.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwsdr_types::content::{CompanyProfile, FaqEntry};

    #[test]
    fn instructions_embed_company_and_faq_in_order() {
        let content = FaqContent::default();
        let prompt = build_instructions(&content);

        assert!(prompt.contains("You are a friendly SDR for Physics Wallah."));
        assert!(prompt.contains("Mission: Deliver high-quality education at the lowest price in India."));

        let first = prompt.find("Q: What is PW?").unwrap();
        let last = prompt.find("Q: What about pricing?").unwrap();
        assert!(first < last);
    }

    #[test]
    fn instructions_name_tool_fallback_and_closing_phrases() {
        let prompt = build_instructions(&FaqContent::default());
        assert!(prompt.contains("call the save_lead tool"));
        assert!(prompt.contains(FALLBACK_ANSWER));
        assert!(prompt.contains("\"i'm done\""));
        assert!(prompt.contains("\"thanks\""));
        assert!(prompt.contains("   - Stop asking questions"));
    }

    #[test]
    fn instructions_follow_custom_content() {
        let content = FaqContent {
            company: CompanyProfile {
                name: "Acme Coaching".to_string(),
                description: "d".to_string(),
                mission: "m".to_string(),
            },
            faq: vec![FaqEntry::new("Hostel?", "Yes, in Kota.")],
        };
        let prompt = build_instructions(&content);
        assert!(prompt.contains("SDR for Acme Coaching."));
        assert!(prompt.contains("Q: Hostel?\nA: Yes, in Kota."));
        assert!(!prompt.contains("Physics Wallah"));
    }

    #[test]
    fn greeting_names_company() {
        assert!(greeting(&FaqContent::default()).contains("Physics Wallah"));
    }
}
