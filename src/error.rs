use thiserror::Error;

/// Everything that can go wrong during one poll cycle.
#[derive(Debug, Error)]
pub enum ReminderError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("GET request failed. Response code: {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed task list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid due date {value:?}: {source}")]
    DueDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL: {value:?}")]
    InvalidUrl { name: &'static str, value: String },

    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidInterval { name: &'static str, value: String },
}
