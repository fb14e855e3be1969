//! Daily Journal Entries

use chrono::{DateTime, Local};

/// One evening reflection, collected interactively.
#[derive(Debug, Clone, Default)]
pub struct JournalEntry {
    /// Self-rated mood, 1-10
    pub mood: String,
    /// Self-rated energy, 1-10
    pub energy: String,
    /// (prompt, answer) pairs in the order asked; skipped prompts are
    /// not recorded
    pub responses: Vec<(String, String)>,
}

impl JournalEntry {
    pub fn to_markdown(&self, now: DateTime<Local>) -> String {
        let mut lines = vec![
            format!("# Daily Journal: {}", now.format("%A, %B %d, %Y")),
            String::new(),
            format!("**Date:** {}", now.format("%Y-%m-%d")),
            format!("**Time:** {}", now.format("%H:%M")),
            String::new(),
        ];

        if !self.mood.is_empty() {
            lines.push(format!("**Mood:** {}/10", self.mood));
            lines.push(String::new());
        }
        if !self.energy.is_empty() {
            lines.push(format!("**Energy:** {}/10", self.energy));
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(String::new());

        for (prompt, answer) in &self.responses {
            lines.push(format!("## {}", prompt));
            lines.push(String::new());
            lines.push(answer.clone());
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// One entry per day; a rerun overwrites.
    pub fn filename(now: DateTime<Local>) -> String {
        format!("{}.md", now.format("%Y-%m-%d"))
    }
}
