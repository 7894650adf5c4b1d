use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Source unavailable: {name}: {reason}")]
    SourceUnavailable { name: String, reason: String },

    #[error("Missing attribute {attribute} for player {player}")]
    MissingAttribute {
        player: String,
        attribute: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoutError {
    /// Whether retrying the same call later may succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScoutError::SourceUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
