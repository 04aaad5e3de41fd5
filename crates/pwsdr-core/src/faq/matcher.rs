//! Keyword-overlap FAQ matcher.
//!
//! A deliberately cheap heuristic, not semantic search: the first entry (in
//! document order) with any question keyword appearing as a substring of the
//! query wins. Short common keywords such as "is" or "a" match almost
//! anything, so earlier entries shadow later ones; callers accept that.

use pwsdr_types::content::{FALLBACK_ANSWER, FaqContent, FaqEntry};

/// Find the first FAQ entry whose question shares a keyword with `query`.
///
/// Keywords are the lower-cased whitespace-separated tokens of the question,
/// punctuation included ("pw?" stays "pw?"). Returns `None` when nothing
/// matches.
pub fn find_answer<'a>(query: &str, content: &'a FaqContent) -> Option<&'a FaqEntry> {
    let query = query.to_lowercase();

    content.faq.iter().find(|entry| {
        entry
            .question
            .to_lowercase()
            .split_whitespace()
            .any(|keyword| query.contains(keyword))
    })
}

/// Outcome of one FAQ lookup: the matched entry, if any, and the text to say.
#[derive(Debug, Clone, Copy)]
pub struct FaqLookup<'a> {
    pub entry: Option<&'a FaqEntry>,
}

impl<'a> FaqLookup<'a> {
    pub fn matched(&self) -> bool {
        self.entry.is_some()
    }

    /// Answer text, or the specialist hand-off line on a miss.
    pub fn answer(&self) -> &'a str {
        match self.entry {
            Some(entry) => &entry.answer,
            None => FALLBACK_ANSWER,
        }
    }
}

/// Look `query` up, keeping both the match and the reply text.
pub fn lookup<'a>(query: &str, content: &'a FaqContent) -> FaqLookup<'a> {
    FaqLookup {
        entry: find_answer(query, content),
    }
}
