use thiserror::Error;

/// Failures surfaced to the caller of the fixtures client.
///
/// Transient upstream problems (network errors, rate limiting, unexpected
/// payloads) are not errors: they come back as `Ok(None)`.
#[derive(Debug, Error)]
pub enum FixturesError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("{0} does not exist")]
    UnknownTimezone(String),
    #[error("{0} doesn't exist")]
    UnknownCountry(String),
    #[error("API_KEY is not correct")]
    Authentication,
    #[error("failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),
}

impl FixturesError {
    /// True for errors the caller can fix by changing its input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            FixturesError::InvalidUrl(_)
                | FixturesError::UnknownTimezone(_)
                | FixturesError::UnknownCountry(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FixturesError>;
