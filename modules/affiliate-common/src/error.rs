use thiserror::Error;

pub type Result<T> = std::result::Result<T, AffiliateError>;

/// Failures surfaced by the write and generate paths. The message is what the
/// caller sees, so variants carry it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AffiliateError {
    #[error("{0}")]
    ConfigurationMissing(String),

    #[error("{0}")]
    UpstreamRequestFailed(String),

    #[error("{0}")]
    UnsupportedOperation(String),

    #[error("{0}")]
    Validation(String),
}

impl AffiliateError {
    /// HTTP status a route should answer with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            AffiliateError::Validation(_) => 400,
            AffiliateError::ConfigurationMissing(_)
            | AffiliateError::UpstreamRequestFailed(_)
            | AffiliateError::UnsupportedOperation(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = AffiliateError::ConfigurationMissing("Facebook credentials not configured".into());
        assert_eq!(err.to_string(), "Facebook credentials not configured");
    }

    #[test]
    fn only_validation_maps_to_bad_request() {
        assert_eq!(AffiliateError::Validation("x".into()).http_status(), 400);
        assert_eq!(AffiliateError::UnsupportedOperation("x".into()).http_status(), 500);
        assert_eq!(AffiliateError::UpstreamRequestFailed("x".into()).http_status(), 500);
        assert_eq!(AffiliateError::ConfigurationMissing("x".into()).http_status(), 500);
    }
}
