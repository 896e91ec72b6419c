//! Error types for the `LyricFind` client.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The provider answered with an error status, an embedded error code,
    /// or a body without the expected payload.
    #[error("LyricFind error {}: {}", .0.status, .0.reason)]
    Provider(#[from] ProviderError),

    /// A request was rejected client-side before reaching the network.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Status code carried by a provider error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Provider(e) => Some(e.status),
            _ => None,
        }
    }

    /// Returns true if the provider reported the target as missing.
    ///
    /// An embedded code outside the HTTP error range on a body without a
    /// payload counts as missing too.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Provider(e) if e.status == 404 || e.is_embedded_miss())
    }
}

/// A failure reported by the provider.
///
/// `status` is the HTTP status, or the provider's own code when the body embeds
/// one. `reason` is looked up from a fixed table keyed by that status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ProviderError {
    pub status: u16,
    pub reason: String,
    /// Free-form description sent by the provider alongside an embedded code.
    pub description: Option<String>,
    /// `status` came from the body of a 200 response, not the HTTP status line.
    pub embedded: bool,
}

impl ProviderError {
    pub fn from_status(status: u16) -> Self {
        Self {
            status,
            reason: reason_for(status),
            description: None,
            embedded: false,
        }
    }

    /// An error code the provider embedded in a 200 response body.
    pub fn embedded(code: u16) -> Self {
        Self {
            embedded: true,
            ..Self::from_status(code)
        }
    }

    /// Payload-shape errors are reported the same way as a 404.
    pub fn not_found() -> Self {
        Self::from_status(404)
    }

    /// An embedded code that is not an HTTP error status.
    pub const fn is_embedded_miss(&self) -> bool {
        self.embedded && !(self.status >= 400 && self.status < 600)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Human-readable reason for a provider status.
pub fn reason_for(status: u16) -> String {
    match status {
        404 => "Not found".to_string(),
        302 => "Moved temporarily, or blocked by captcha".to_string(),
        403 => "Forbidden, or invalid".to_string(),
        429 => "Too many requests".to_string(),
        500 => "Server error".to_string(),
        other => format!(
            "Unknown error, please report to the project maintainer. HTTP code {other}"
        ),
    }
}

/// Client-side precondition failures for translation requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No translation found on this track")]
    NoTranslations,

    #[error(
        "Unsupported translation language '{requested}', available: [{}]",
        .allowed.join(", ")
    )]
    UnsupportedLanguage {
        requested: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// Languages the caller may choose from.
    pub fn allowed(&self) -> &[String] {
        match self {
            Self::NoTranslations => &[],
            Self::UnsupportedLanguage { allowed, .. } => allowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_codes() {
        let err = ProviderError::embedded(206);
        assert!(err.is_embedded_miss());
        assert!(Error::from(err).is_not_found());

        assert!(!ProviderError::embedded(429).is_embedded_miss());
        assert!(!ProviderError::from_status(302).is_embedded_miss());
        assert!(!Error::from(ProviderError::from_status(302)).is_not_found());
    }

    #[test]
    fn test_reason_table() {
        assert_eq!(ProviderError::from_status(404).reason, "Not found");
        assert_eq!(ProviderError::from_status(429).reason, "Too many requests");
        assert_eq!(
            ProviderError::from_status(302).reason,
            "Moved temporarily, or blocked by captcha"
        );
    }

    #[test]
    fn test_unknown_status_mentions_code() {
        let err = ProviderError::from_status(418);
        assert!(err.reason.contains("418"));
        assert!(err.reason.starts_with("Unknown error"));
    }

    #[test]
    fn test_error_display() {
        let err = Error::from(ProviderError::not_found());
        assert_eq!(err.to_string(), "LyricFind error 404: Not found");
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_validation_lists_allowed() {
        let err = ValidationError::UnsupportedLanguage {
            requested: "fr".into(),
            allowed: vec!["de".into(), "en".into()],
        };
        assert_eq!(err.allowed(), ["de", "en"]);
        assert!(err.to_string().contains("[de, en]"));
        assert!(Error::from(err).status().is_none());
    }
}
