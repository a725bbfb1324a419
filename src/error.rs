use thiserror::Error;

/// Errors that can occur during meal search operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport or connectivity failure while reaching the search endpoint
    #[error("Failed to fetch from endpoint: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected envelope shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
