use thiserror::Error;

#[derive(Error, Debug)]
pub enum KabuError {
    #[error("Missing configuration: {key} is not set")]
    MissingConfiguration { key: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("The model returned no usable content")]
    EmptyResponse,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl KabuError {
    pub fn missing_configuration(key: &str) -> Self {
        KabuError::MissingConfiguration {
            key: key.to_string(),
        }
    }
}
