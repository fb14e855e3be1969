pub mod actions;
pub mod category;
pub mod config;
pub mod dump;
pub mod error;
pub mod journal;
pub mod memory;
pub mod research;
pub mod weekly;

pub use actions::ActionExtractor;
pub use config::{Config, DailyConfig, MetricConfig, MetricType, ResearchConfig, WeeklyConfig};
pub use dump::DumpReport;
pub use error::{LifeOsError, Result};
pub use journal::JournalEntry;
pub use memory::{MemoryStore, Section};
pub use research::{ContentIdea, ResearchFindings, ResourceLink, Trend};
pub use weekly::WeeklyCheckin;

// Category system
pub use category::{
    split_thoughts, CategorizedThoughts, Category, CategoryRule, ThoughtClassifier,
    CATEGORY_RULES,
};
