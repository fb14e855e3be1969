//! Brain Dump Reports
//!
//! Ties the classifier and the action extractor together and renders
//! the result as a dated Markdown note.

use chrono::{DateTime, Local};

use crate::actions::ActionExtractor;
use crate::category::{CategorizedThoughts, ThoughtClassifier};
use crate::error::Result;

/// A processed brain dump, ready to render.
#[derive(Debug)]
pub struct DumpReport {
    /// The input text, unmodified.
    pub raw: String,
    pub thoughts: CategorizedThoughts,
    pub actions: Vec<String>,
}

impl DumpReport {
    /// Classify `text` and extract its action items.
    pub fn process(text: &str) -> Result<Self> {
        let classifier = ThoughtClassifier::new();
        let extractor = ActionExtractor::new()?;
        Ok(Self {
            raw: text.to_string(),
            thoughts: classifier.classify(text),
            actions: extractor.extract(text),
        })
    }

    /// Render the report as Markdown.
    ///
    /// The raw text is embedded in a fenced block verbatim, without
    /// escaping: input that itself contains a fence terminator will
    /// break the block.
    pub fn to_markdown(&self, now: DateTime<Local>) -> String {
        let stamp = now.format("%Y-%m-%d %H:%M").to_string();

        let mut lines = vec![
            format!("# Brain Dump: {}", stamp),
            String::new(),
            "## 📝 Raw Thoughts".to_string(),
            String::new(),
            "```".to_string(),
            self.raw.clone(),
            "```".to_string(),
            String::new(),
            "## 🏷️ Categorized".to_string(),
            String::new(),
        ];

        for (category, items) in self.thoughts.sections() {
            lines.push(format!("### {}", category.title()));
            for item in items {
                lines.push(format!("- {}", item));
            }
            lines.push(String::new());
        }

        if !self.actions.is_empty() {
            lines.push("## ⚡ Potential Action Items".to_string());
            lines.push(String::new());
            for action in &self.actions {
                lines.push(format!("- [ ] {}", action));
            }
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(String::new());
        lines.push(format!("*Processed: {}*", stamp));

        lines.join("\n")
    }

    /// Note filename, minute precision. Two runs in the same minute
    /// overwrite each other.
    pub fn filename(now: DateTime<Local>) -> String {
        format!("{}.md", now.format("%Y-%m-%d-%H%M"))
    }
}
