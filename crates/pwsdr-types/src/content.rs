use serde::{Deserialize, Serialize};

/// Reply used when no FAQ entry matches a user question.
pub const FALLBACK_ANSWER: &str =
    "I don't have information on that, but I can connect you to a specialist.";

/// Company profile shown to the agent and quoted in greetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub description: String,
    pub mission: String,
}

/// A single canned question/answer pair.
///
/// Serialized with the short `q`/`a` keys used by the content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The static company/FAQ document the agent answers from.
///
/// Loaded once at startup and passed by reference afterwards; entries are
/// kept in document order because the matcher is first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqContent {
    pub company: CompanyProfile,
    pub faq: Vec<FaqEntry>,
}

impl Default for FaqContent {
    /// The bundled Physics Wallah document written on first run.
    fn default() -> Self {
        Self {
            company: CompanyProfile {
                name: "Physics Wallah".to_string(),
                description: "PW is India’s leading affordable EdTech platform offering courses for NEET, JEE, UPSC and countless competitive exams.".to_string(),
                mission: "Deliver high-quality education at the lowest price in India.".to_string(),
            },
            faq: vec![
                FaqEntry::new(
                    "What is PW?",
                    "PW is an affordable EdTech platform offering online & offline classes for competitive exams in India.",
                ),
                FaqEntry::new(
                    "Is there a free trial?",
                    "Yes! Many PW courses include free demo lectures and sample chapter tests.",
                ),
                FaqEntry::new(
                    "What courses do you offer?",
                    "PW offers courses for NEET, JEE, UPSC, GATE, banking, and school-level boards.",
                ),
                FaqEntry::new(
                    "Who are PW teachers?",
                    "PW features highly qualified educators, including Alakh Pandey Sir and other top faculty.",
                ),
                FaqEntry::new(
                    "What about pricing?",
                    "PW courses are among the most affordable, starting from ₹299 to ₹5000 depending on class and exam type.",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_has_five_entries() {
        let content = FaqContent::default();
        assert_eq!(content.faq.len(), 5);
        assert_eq!(content.company.name, "Physics Wallah");
        assert_eq!(
            content.company.mission,
            "Deliver high-quality education at the lowest price in India."
        );
    }

    #[test]
    fn test_faq_entry_uses_short_keys() {
        let entry = FaqEntry::new("What is PW?", "An EdTech platform.");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["q"], "What is PW?");
        assert_eq!(json["a"], "An EdTech platform.");
        assert!(json.get("question").is_none());
    }

    #[test]
    fn test_content_file_shape_parses() {
        let raw = r#"{
            "company": {"name": "Acme", "description": "d", "mission": "m"},
            "faq": [{"q": "Hours?", "a": "Nine to five."}]
        }"#;
        let content: FaqContent = serde_json::from_str(raw).unwrap();
        assert_eq!(content.company.name, "Acme");
        assert_eq!(content.faq[0].answer, "Nine to five.");
    }

    #[test]
    fn test_content_missing_faq_is_rejected() {
        let raw = r#"{"company": {"name": "Acme", "description": "d", "mission": "m"}}"#;
        assert!(serde_json::from_str::<FaqContent>(raw).is_err());
    }
}
