//! Memory Store
//!
//! Owns the on-disk note tree under `<base>/memory` and the dated
//! filename conventions used by each note section.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local};

use crate::error::Result;

const MEMORY_DIR: &str = "memory";

/// Note sections under the memory directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    BrainDumps,
    Journal,
    Weekly,
    Research,
}

impl Section {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Section::BrainDumps => "brain-dumps",
            Section::Journal => "journal",
            Section::Weekly => "weekly",
            Section::Research => "research",
        }
    }
}

/// File-backed store for generated notes.
///
/// `base_dir` is the resolved life-os base directory; notes live under
/// its `memory/` subtree. Filenames are timestamp-derived, which is
/// the only collision mechanism: a second run with the same name
/// overwrites the first.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    root: PathBuf,
}

impl MemoryStore {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            root: base_dir.join(MEMORY_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn section_dir(&self, section: Section) -> PathBuf {
        self.root.join(section.dir_name())
    }

    /// Write a note, creating parent directories as needed.
    pub fn write_note(&self, section: Section, filename: &str, content: &str) -> Result<PathBuf> {
        let dir = self.section_dir(section);
        fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Path of the weekly check-in written seven days before `today`,
    /// if one exists.
    pub fn last_weekly(&self, today: DateTime<Local>) -> Option<PathBuf> {
        let last_week = today - Duration::days(7);
        let path = self
            .section_dir(Section::Weekly)
            .join(format!("{}.md", last_week.format("%Y-%m-%d")));
        path.exists().then_some(path)
    }
}
