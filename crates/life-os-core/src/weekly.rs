//! Weekly Check-in Dashboard

use chrono::{DateTime, Datelike, Duration, Local};

/// Collected metric answers, in prompt order.
#[derive(Debug, Clone, Default)]
pub struct WeeklyCheckin {
    /// (metric name, answer) pairs; skipped metrics are not recorded
    pub metrics: Vec<(String, String)>,
}

impl WeeklyCheckin {
    /// Render the dashboard. `prompts` are the configured reflection
    /// questions; answers are filled in by hand after the fact.
    pub fn to_markdown(&self, prompts: &[String], now: DateTime<Local>) -> String {
        let week_start = now - Duration::days(now.weekday().num_days_from_monday() as i64);
        let week_end = week_start + Duration::days(6);

        let mut lines = vec![
            format!(
                "# Weekly Check-in: {} - {}",
                week_start.format("%b %d"),
                week_end.format("%b %d, %Y")
            ),
            String::new(),
            "## 📊 Metrics".to_string(),
            String::new(),
        ];

        for (name, value) in &self.metrics {
            lines.push(format!(
                "- **{}:** {}",
                title_case(&name.replace('_', " ")),
                value
            ));
        }

        lines.push(String::new());
        lines.push("## 🎯 Reflections".to_string());
        lines.push(String::new());

        for prompt in prompts {
            lines.push(format!("### {}", prompt));
            lines.push(String::new());
            lines.push("*(Your response here)*".to_string());
            lines.push(String::new());
        }

        lines.push(String::new());
        lines.push("## 📈 Trends".to_string());
        lines.push(String::new());
        lines.push("_Compare with last week (manual or automated)_".to_string());
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
        lines.push(format!("*Logged: {}*", now.format("%Y-%m-%d %H:%M")));

        lines.join("\n")
    }

    /// One check-in per day; a rerun overwrites.
    pub fn filename(now: DateTime<Local>) -> String {
        format!("{}.md", now.format("%Y-%m-%d"))
    }
}

/// "projects completed" -> "Projects Completed"
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
