use thiserror::Error;

/// Every way a UV data request can fail.
///
/// The first three variants are raised while validating input and always
/// occur before any network activity. Everything after that surfaces as
/// [`UvError::FetchFailed`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UvError {
    #[error("Invalid location. Use city name as a string")]
    InvalidLocation,

    #[error("Unsupported city. Available: {available}")]
    UnsupportedCity { input: String, available: String },

    #[error("Invalid date. Must be a valid calendar date")]
    InvalidDate { input: String },

    #[error("UV data fetch failed: {reason}")]
    FetchFailed { status: Option<u16>, reason: String },
}

impl UvError {
    /// HTTP status of a failed upstream response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            UvError::FetchFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// True for errors raised before a request was attempted.
    pub fn is_validation(&self) -> bool {
        !matches!(self, UvError::FetchFailed { .. })
    }

    pub(crate) fn fetch_failed(err: &anyhow::Error) -> Self {
        UvError::FetchFailed { status: None, reason: format!("{err:#}") }
    }
}
