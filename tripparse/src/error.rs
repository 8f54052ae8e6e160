//! Error types for itinerary payload parsing.
//!
//! None of the high-level operations in this crate return these errors: the
//! normalizer converts them into a fallback plan. They are exposed for callers
//! that want to know *why* a response was rejected.

use std::fmt;

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while locating and decoding a response payload.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The text contains no `{ ... }` region at all.
    #[error("No JSON object found in response")]
    NoJsonObject,

    /// JSON parsing error from serde_json.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed but its root is not an object.
    #[error("Expected a JSON object at the root, found {found}")]
    NotAnObject {
        /// Type name of the root value.
        found: &'static str,
    },

    /// Every configured strategy failed.
    #[error("All parsing strategies failed: {}", format_attempts(.attempts))]
    AllStrategiesFailed {
        /// Details of each failed strategy attempt.
        attempts: Vec<StrategyError>,
    },
}

fn format_attempts(attempts: &[StrategyError]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Details of a failed parsing strategy attempt.
#[derive(Debug, Clone)]
pub struct StrategyError {
    /// Name of the strategy that failed.
    pub strategy: &'static str,
    /// Error message describing why it failed.
    pub error: String,
}

impl StrategyError {
    /// Creates a new strategy error.
    #[inline]
    pub fn new(strategy: &'static str, error: impl Into<String>) -> Self {
        Self {
            strategy,
            error: error.into(),
        }
    }
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.strategy, self.error)
    }
}

/// Reasons a string is not a usable coordinate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    /// The text does not split into exactly two comma-separated parts.
    #[error("Expected two comma-separated numbers, found {parts} part(s)")]
    WrongShape {
        /// Number of parts found.
        parts: usize,
    },

    /// One of the parts is not a finite number.
    #[error("Not a finite number: '{0}'")]
    NotANumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_error_display() {
        let err = StrategyError::new("brace_slice", "no closing brace");
        assert_eq!(err.to_string(), "brace_slice: no closing brace");
    }

    #[test]
    fn test_all_strategies_failed_lists_attempts() {
        let err = ParseError::AllStrategiesFailed {
            attempts: vec![
                StrategyError::new("brace_slice", "bad json"),
                StrategyError::new("repair", "still bad"),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("brace_slice: bad json"));
        assert!(message.contains("repair: still bad"));
    }

    #[test]
    fn test_parse_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let parse_err: ParseError = json_err.into();
        assert!(matches!(parse_err, ParseError::Json(_)));
    }
}
