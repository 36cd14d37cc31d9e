use anyhow::Error as AnyhowError;
use std::fmt;

/// Structured error types for the srcskip tool
#[derive(Debug)]
pub enum SrcskipError {
    /// Configuration related errors
    Config {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    /// Input/Output related errors (rule file reading, tree traversal, etc.)
    Io {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    /// Exclusion rule parsing related errors
    Rules {
        message: String,
        line: Option<usize>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl fmt::Display for SrcskipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SrcskipError::Config { message, .. } => {
                write!(f, "Configuration error: {}", message)
            }
            SrcskipError::Io { message, .. } => {
                write!(f, "I/O error: {}", message)
            }
            SrcskipError::Rules { message, line, .. } => {
                if let Some(line) = line {
                    write!(f, "Rule error at line {}: {}", line, message)
                } else {
                    write!(f, "Rule error: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for SrcskipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SrcskipError::Config { source, .. }
            | SrcskipError::Io { source, .. }
            | SrcskipError::Rules { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn std::error::Error + 'static)),
        }
    }
}

impl SrcskipError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a rule parsing error
    pub fn rules<S: Into<String>>(message: S, line: Option<usize>) -> Self {
        Self::Rules {
            message: message.into(),
            line,
            source: None,
        }
    }
}

impl From<std::io::Error> for SrcskipError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

// Allow conversion from anyhow::Error for compatibility
impl From<AnyhowError> for SrcskipError {
    fn from(error: AnyhowError) -> Self {
        Self::Io {
            message: error.to_string(),
            source: Some(error.into()),
        }
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, SrcskipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config_error() {
        let err = SrcskipError::config("source root must be set");
        assert_eq!(
            err.to_string(),
            "Configuration error: source root must be set"
        );
    }

    #[test]
    fn test_display_rule_error_with_line() {
        let err = SrcskipError::rules("empty pattern", Some(3));
        assert_eq!(err.to_string(), "Rule error at line 3: empty pattern");
    }

    #[test]
    fn test_io_error_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = SrcskipError::from(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
