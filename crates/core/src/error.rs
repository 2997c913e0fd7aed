use thiserror::Error;

pub type AdapterResult<T> = Result<T, AdapterError>;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing bid params: {0}")]
    MissingParams(String),

    #[error("Missing size for {media} bid {bid_id}")]
    MissingSize { bid_id: String, media: &'static str },

    #[error("Invalid cpm value: {0}")]
    InvalidCpm(String),

    #[error("No fill for creative {0}")]
    NoFill(String),

    #[error("Unsupported creative: {0}")]
    UnsupportedCreative(String),

    #[error("Malformed ad server response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdapterError {
    /// Short label used when counting dropped input.
    pub fn reason(&self) -> &'static str {
        match self {
            AdapterError::Config(_) => "config",
            AdapterError::MissingParams(_) => "missing_params",
            AdapterError::MissingSize { .. } => "missing_size",
            AdapterError::InvalidCpm(_) => "invalid_cpm",
            AdapterError::NoFill(_) => "no_fill",
            AdapterError::UnsupportedCreative(_) => "unsupported_creative",
            AdapterError::MalformedResponse(_) => "malformed_response",
            AdapterError::Serialization(_) => "serialization",
        }
    }
}
