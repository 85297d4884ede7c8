use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// The book is still readable; only a side feature failed.
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: ErrorSeverity,
    pub suggestions: Vec<String>,
}

impl ErrorState {
    #[must_use]
    pub fn from_message(message: String) -> Self {
        Self::new(message, ErrorSeverity::Error)
    }

    #[must_use]
    pub fn new(message: String, severity: ErrorSeverity) -> Self {
        Self {
            suggestions: crate::app::recovery::get_suggestions(&message),
            message,
            timestamp: Local::now(),
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ignores_message_text() {
        let e = ErrorState::from_message(
            "Failed to load table of contents: cannot read /home/u/favorites/toc.json: gone"
                .to_string(),
        );
        assert_eq!(e.severity, ErrorSeverity::Error);

        let e = ErrorState::new(
            "Failed to save favorites: read-only".to_string(),
            ErrorSeverity::Warning,
        );
        assert_eq!(e.severity, ErrorSeverity::Warning);
        assert!(!e.suggestions.is_empty());
    }
}
