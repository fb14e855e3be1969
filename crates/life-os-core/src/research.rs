//! Research Notes
//!
//! Manual-entry research findings. Live source integration (web
//! search, RSS) is out of scope; the renderer covers the full findings
//! shape so an automated producer could reuse it unchanged.

use chrono::{DateTime, Local};

/// Findings collected in one research session.
#[derive(Debug, Clone, Default)]
pub struct ResearchFindings {
    /// Summary line; a placeholder is rendered when absent
    pub summary: Option<String>,
    pub trends: Vec<Trend>,
    pub ideas: Vec<ContentIdea>,
    pub resources: Vec<ResourceLink>,
}

#[derive(Debug, Clone)]
pub struct Trend {
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct ContentIdea {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

impl ResearchFindings {
    pub fn to_markdown(&self, now: DateTime<Local>) -> String {
        let mut lines = vec![
            format!("# Content Research: {}", now.format("%A, %B %d, %Y")),
            String::new(),
            "## 🔍 Research Summary".to_string(),
            String::new(),
            self.summary
                .clone()
                .unwrap_or_else(|| "_Research completed_".to_string()),
            String::new(),
        ];

        if !self.trends.is_empty() {
            lines.push("## 📊 Key Trends".to_string());
            lines.push(String::new());
            for trend in &self.trends {
                lines.push(format!("### {}", trend.title));
                lines.push(String::new());
                lines.push(trend.summary.clone());
                lines.push(String::new());
                lines.push(format!("**Source:** {}", trend.source));
                lines.push(format!("**URL:** {}", trend.url));
                lines.push(String::new());
            }
        }

        if !self.ideas.is_empty() {
            lines.push("## 💡 Content Ideas".to_string());
            lines.push(String::new());
            for (i, idea) in self.ideas.iter().enumerate() {
                lines.push(format!("### Idea {}: {}", i + 1, idea.title));
                lines.push(String::new());
                lines.push(idea.description.clone());
                lines.push(String::new());
            }
        }

        if !self.resources.is_empty() {
            lines.push("## 📚 Resources".to_string());
            lines.push(String::new());
            for resource in &self.resources {
                lines.push(format!("- [{}]({})", resource.title, resource.url));
            }
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(String::new());
        lines.push(format!("*Generated: {}*", now.format("%Y-%m-%d %H:%M")));

        lines.join("\n")
    }

    pub fn filename(now: DateTime<Local>) -> String {
        format!("{}-findings.md", now.format("%Y-%m-%d"))
    }
}
