use thiserror::Error;

/// Errors raised by the page-object layer, the browser driver and the API helpers
#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("Locator format error: {0}")]
    LocatorFormat(String),

    #[error("Checkbox with label '{label}' not found. Available labels: {}", available.join(", "))]
    UnknownCheckbox { label: String, available: Vec<String> },

    #[error("Invalid sort order '{0}', expected 'asc' or 'desc'")]
    InvalidSortOrder(String),

    /// The environment blocked the run (bot protection); the test is skipped, not failed
    #[error("Skipped: {0}")]
    Skipped(String),

    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Driver operation '{action}' failed: {reason}")]
    DriverFailed { action: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl E2eError {
    /// Build a `DriverFailed` error from any displayable driver error
    pub fn driver(action: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::DriverFailed {
            action: action.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error means "skip this test" rather than "fail it"
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

pub type Result<T> = std::result::Result<T, E2eError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_checkbox_lists_labels() {
        let err = E2eError::UnknownCheckbox {
            label: "Стажировка".to_string(),
            available: vec!["Полная".to_string(), "Частичная".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'Стажировка'"));
        assert!(msg.contains("Полная, Частичная"));
    }

    #[test]
    fn test_is_skip() {
        assert!(E2eError::Skipped("captcha".into()).is_skip());
        assert!(!E2eError::AssertionFailed("x".into()).is_skip());
    }

    #[test]
    fn test_driver_error() {
        let err = E2eError::driver("click", "detached node");
        assert_eq!(err.to_string(), "Driver operation 'click' failed: detached node");
    }
}
