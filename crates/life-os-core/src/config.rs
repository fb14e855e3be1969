use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LifeOsError, Result};

const CONFIG_FILE: &str = "life-os-config.yaml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# life-os configuration file
# Location: <base-dir>/life-os-config.yaml

daily:
  # Questions asked by `life-os journal`, in order.
  prompts:
    - "Three things you're grateful for:"
    - "What energized you today?"
    - "What drained your energy?"
    - "One thing to prioritize tomorrow:"

weekly:
  # When the check-in is meant to run. Informational; pair with cron.
  day: sunday
  time: "19:00"
  # Metrics collected by `life-os weekly`.
  metrics:
    - name: projects_completed
      prompt: "Projects completed this week?"
      type: number
    - name: focus_area
      prompt: "Main focus this week?"
      type: text
  # Reflection questions rendered into the dashboard.
  prompts:
    - "Biggest win this week?"
    - "What didn't go as planned?"
    - "One thing you learned?"
    - "Focus for next week?"

research:
  # Topics shown by `life-os research`.
  interests:
    - AI tools
    - productivity
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub daily: DailyConfig,

    #[serde(default)]
    pub weekly: WeeklyConfig,

    #[serde(default)]
    pub research: ResearchConfig,
}

/// Daily journal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyConfig {
    /// Journal questions, asked in order
    #[serde(default = "default_daily_prompts")]
    pub prompts: Vec<String>,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            prompts: default_daily_prompts(),
        }
    }
}

/// Weekly check-in configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyConfig {
    /// Day the check-in is meant to run
    #[serde(default = "default_weekly_day")]
    pub day: String,

    /// Time the check-in is meant to run
    #[serde(default = "default_weekly_time")]
    pub time: String,

    /// Metrics collected interactively
    #[serde(default = "default_weekly_metrics")]
    pub metrics: Vec<MetricConfig>,

    /// Reflection questions rendered into the dashboard
    #[serde(default = "default_weekly_prompts")]
    pub prompts: Vec<String>,
}

impl Default for WeeklyConfig {
    fn default() -> Self {
        Self {
            day: default_weekly_day(),
            time: default_weekly_time(),
            metrics: default_weekly_metrics(),
            prompts: default_weekly_prompts(),
        }
    }
}

/// One tracked weekly metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricConfig {
    pub name: String,
    pub prompt: String,
    #[serde(default = "default_metric_type", rename = "type")]
    pub kind: MetricType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Number,
    Text,
}

/// Research command configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// Topics shown when the command starts
    #[serde(default = "default_research_interests")]
    pub interests: Vec<String>,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            interests: default_research_interests(),
        }
    }
}

fn default_daily_prompts() -> Vec<String> {
    [
        "Three things you're grateful for:",
        "What energized you today?",
        "What drained your energy?",
        "One thing to prioritize tomorrow:",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_weekly_day() -> String {
    "sunday".to_string()
}

fn default_weekly_time() -> String {
    "19:00".to_string()
}

fn default_weekly_metrics() -> Vec<MetricConfig> {
    vec![
        MetricConfig {
            name: "projects_completed".to_string(),
            prompt: "Projects completed this week?".to_string(),
            kind: MetricType::Number,
        },
        MetricConfig {
            name: "focus_area".to_string(),
            prompt: "Main focus this week?".to_string(),
            kind: MetricType::Text,
        },
    ]
}

fn default_weekly_prompts() -> Vec<String> {
    [
        "Biggest win this week?",
        "What didn't go as planned?",
        "One thing you learned?",
        "Focus for next week?",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_metric_type() -> MetricType {
    MetricType::Text
}

fn default_research_interests() -> Vec<String> {
    vec!["AI tools".to_string(), "productivity".to_string()]
}

impl Config {
    /// Load config from base directory. A missing or empty file yields
    /// the defaults, never an error.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| LifeOsError::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = serde_yaml::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(tmp.path()).unwrap();

        assert_eq!(config.daily.prompts.len(), 4);
        assert_eq!(config.weekly.day, "sunday");
        assert_eq!(config.weekly.metrics.len(), 2);
        assert_eq!(config.research.interests, vec!["AI tools", "productivity"]);
    }

    #[test]
    fn test_load_empty_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(Config::path(tmp.path()), "").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.weekly.prompts.len(), 4);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            Config::path(tmp.path()),
            "weekly:\n  day: monday\n  metrics: []\n",
        )
        .unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.weekly.day, "monday");
        assert!(config.weekly.metrics.is_empty());
        // Untouched sections keep their defaults.
        assert_eq!(config.weekly.time, "19:00");
        assert_eq!(config.daily.prompts.len(), 4);
    }

    #[test]
    fn test_save_load_round_trip() {
        let tmp = TempDir::new().unwrap();

        let mut config = Config::default();
        config.weekly.metrics = vec![MetricConfig {
            name: "workouts".to_string(),
            prompt: "Workouts this week?".to_string(),
            kind: MetricType::Number,
        }];
        config.weekly.prompts.push("Custom prompt?".to_string());
        config.save(tmp.path()).unwrap();

        let loaded = Config::load(tmp.path()).unwrap();
        assert_eq!(loaded.weekly.metrics.len(), 1);
        assert_eq!(loaded.weekly.metrics[0].name, "workouts");
        assert_eq!(loaded.weekly.metrics[0].kind, MetricType::Number);
        assert_eq!(loaded.weekly.prompts.len(), 5);
    }

    #[test]
    fn test_init_writes_template_only_once() {
        let tmp = TempDir::new().unwrap();

        let path = Config::init(tmp.path()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("life-os configuration file"));

        // A second init must not clobber edits.
        fs::write(&path, "research:\n  interests: [woodworking]\n").unwrap();
        Config::init(tmp.path()).unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.research.interests, vec!["woodworking"]);
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        let defaults = Config::default();
        assert_eq!(config.daily.prompts, defaults.daily.prompts);
        assert_eq!(config.weekly.prompts, defaults.weekly.prompts);
        assert_eq!(config.research.interests, defaults.research.interests);
    }

    #[test]
    fn test_malformed_config_reports_parse_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(Config::path(tmp.path()), "weekly: [not, a, mapping]\n").unwrap();

        let err = Config::load(tmp.path()).unwrap_err();
        assert!(matches!(err, LifeOsError::ConfigParse { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
