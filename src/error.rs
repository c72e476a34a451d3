use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid game name {name:?} derived from {}", .source_dir.display())]
    InvalidGameName { name: String, source_dir: PathBuf },
    #[error("Failed to launch build command `{program}`: {source}")]
    BuildLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
