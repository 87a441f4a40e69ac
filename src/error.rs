//! Error types for the top-teams CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, DotaError>;

#[derive(Error, Debug)]
pub enum DotaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The bulk `/proPlayers` call failed; nothing downstream can run.
    #[error("unable to get players: {0}")]
    Players(#[source] Box<DotaError>),
}

impl DotaError {
    /// Wrap an error raised while fetching the pro player list.
    pub fn players(cause: DotaError) -> Self {
        DotaError::Players(Box::new(cause))
    }
}
