use gamesdb_core::XmlError;

/// Errors that can occur while talking to the catalog.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response document: {0}")]
    Xml(#[from] XmlError),

    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("No {kind} with id {id} in the catalog")]
    NotFound { kind: &'static str, id: i32 },

    #[error("Rating must be between 1 and 10, got {0}")]
    InvalidRating(i32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
