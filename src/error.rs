//! Error types
//!
//! Every fallible library operation returns [`Result`]. The numeric core
//! itself never fails on well-formed input; errors come from parameter
//! validation, runtime limits, malformed matrices, and I/O at the edges.

use thiserror::Error;

/// Errors raised while building a Pathfinder network
#[derive(Debug, Error)]
pub enum PfnetError {
    /// A tunable parameter is outside its contract
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// A runtime limit was exceeded before the quadratic stages ran
    #[error("{what} limit exceeded: {actual} > {limit}")]
    LimitExceeded {
        what: &'static str,
        limit: usize,
        actual: usize,
    },

    /// A matrix built from rows was not square
    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PfnetError {
    /// Shorthand for [`PfnetError::InvalidParameter`]
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PfnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PfnetError::invalid("minkowski_exponent", "must be >= 1, got 0.5");
        assert_eq!(
            err.to_string(),
            "invalid parameter `minkowski_exponent`: must be >= 1, got 0.5"
        );
    }

    #[test]
    fn test_limit_exceeded_display() {
        let err = PfnetError::LimitExceeded {
            what: "node",
            limit: 10,
            actual: 12,
        };
        assert_eq!(err.to_string(), "node limit exceeded: 12 > 10");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PfnetError = io.into();
        assert!(matches!(err, PfnetError::Io(_)));
    }
}
