//! Action Item Extraction
//!
//! Scans whole dump text for imperative phrases ("need to call Bob",
//! "next step: draft the outline") and collects the clause that
//! follows, independent of how the fragments were categorized.

use regex::Regex;

use crate::error::Result;

/// Captured phrases at or below this length (after trimming) are noise.
const MIN_ACTION_LEN: usize = 3;

/// Applied in order over the full text; the capture is the clause up
/// to the next period, newline or end of input.
const ACTION_PATTERNS: &[&str] = &[
    r"(?i)(?:need to|should|must|have to|todo|task)[,:]?\s*(.+?)(?:[.\n]|$)",
    r"(?i)(?:action|next step)[,:]?\s*(.+?)(?:[.\n]|$)",
];

/// Extracts action phrases from raw dump text.
///
/// A phrase matched by both patterns is reported twice; callers that
/// want a deduplicated list have to do it themselves.
#[derive(Debug)]
pub struct ActionExtractor {
    patterns: Vec<Regex>,
}

impl ActionExtractor {
    pub fn new() -> Result<Self> {
        let patterns = ACTION_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// All matches for the first pattern, then the second, each in
    /// left-to-right scan order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut actions = Vec::new();
        for pattern in &self.patterns {
            for caps in pattern.captures_iter(text) {
                if let Some(m) = caps.get(1) {
                    let action = m.as_str().trim();
                    if action.chars().count() > MIN_ACTION_LEN {
                        actions.push(action.to_string());
                    }
                }
            }
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        ActionExtractor::new().unwrap().extract(text)
    }

    #[test]
    fn test_extracts_clauses_in_scan_order() {
        let actions = extract("I need to call Bob. I should email Alice.");
        assert_eq!(actions, vec!["call Bob", "email Alice"]);
    }

    #[test]
    fn test_case_insensitive_triggers() {
        let actions = extract("TODO: water the plants");
        assert_eq!(actions, vec!["water the plants"]);
    }

    #[test]
    fn test_short_captures_dropped() {
        // "now" is three characters, under the noise threshold.
        let actions = extract("must now");
        assert!(actions.is_empty(), "Got {:?}", actions);
    }

    #[test]
    fn test_clause_stops_at_newline() {
        let actions = extract("have to fix the gate\nunrelated line");
        assert_eq!(actions, vec!["fix the gate"]);
    }

    #[test]
    fn test_second_pattern_after_first() {
        let actions = extract("next step: sand the door. I must paint the door.");
        // First pattern's matches come first regardless of text position.
        assert_eq!(actions, vec!["paint the door", "sand the door"]);
    }

    #[test]
    fn test_duplicates_across_patterns_kept() {
        // "task" and "action" both introduce the same clause.
        let actions = extract("task: review drafts\naction: review drafts");
        assert_eq!(actions, vec!["review drafts", "review drafts"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
    }
}
