//! Error types for the logging pipeline

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A log value could not be turned into text
    #[error("Cannot convert {type_name} value to text: {message}")]
    Conversion { type_name: String, message: String },

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    Formatter {
        format_type: String,
        message: String,
    },

    /// Writer returned an error
    #[error("Writer '{writer}' failed: {message}")]
    Writer { writer: String, message: String },

    /// Writer panicked while writing
    #[error("Writer '{writer}' panicked: {message}")]
    WriterPanicked { writer: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a value conversion error
    pub fn conversion(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Conversion {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Formatter {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a writer error
    pub fn writer(writer: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Writer {
            writer: writer.into(),
            message: message.into(),
        }
    }

    /// Create a writer panic error
    pub fn writer_panicked(writer: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::WriterPanicked {
            writer: writer.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::formatter("json", "bad field");
        assert!(matches!(err, LoggerError::Formatter { .. }));

        let err = LoggerError::writer("console", "broken pipe");
        assert!(matches!(err, LoggerError::Writer { .. }));

        let err = LoggerError::config("LoggerOptions", "queue capacity must be positive");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::formatter("JSON", "Invalid field type");
        assert_eq!(err.to_string(), "Formatter error (JSON): Invalid field type");

        let err = LoggerError::writer("file", "Disk full");
        assert_eq!(err.to_string(), "Writer 'file' failed: Disk full");

        let err = LoggerError::conversion("bytes", "invalid utf-8 sequence");
        assert_eq!(
            err.to_string(),
            "Cannot convert bytes value to text: invalid utf-8 sequence"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
