use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HomelabError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot derive repository root from {}", .0.display())]
    RepoRoot(PathBuf),

    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HomelabError>;
