use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeOsError {
    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid action pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, LifeOsError>;

impl LifeOsError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigParse { .. } => 3,
            _ => 1,
        }
    }
}
