//! Error types for Lead Chat.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lead API error: {0}")]
    LeadApi(#[from] LeadApiError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Lead persistence errors.
///
/// These never surface to the visitor: the runtime logs them and the
/// conversation continues.
#[derive(Debug, thiserror::Error)]
pub enum LeadApiError {
    #[error("Request to lead API failed: {0}")]
    Request(String),

    #[error("Lead API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response from lead API: {0}")]
    InvalidResponse(String),

    #[error("Lead API reported failure")]
    Rejected,
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
