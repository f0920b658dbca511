use thiserror::Error;

pub type Result<T> = std::result::Result<T, SocialClientError>;

#[derive(Debug, Error)]
pub enum SocialClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SocialClientError {
    fn from(err: reqwest::Error) -> Self {
        SocialClientError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SocialClientError {
    fn from(err: serde_json::Error) -> Self {
        SocialClientError::Parse(err.to_string())
    }
}
