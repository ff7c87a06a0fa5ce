use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// A required field is missing or empty on create.
    #[error("{0}")]
    Validation(String),

    /// The identifier does not resolve within its collection.
    /// The payload is the entity label, e.g. "Divisi".
    #[error("{0} not found")]
    NotFound(String),

    /// The backing store holds content that cannot be parsed.
    #[error("Corrupt collection data: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(label: impl Into<String>) -> Self {
        AppError::NotFound(label.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_carries_entity_label() {
        let err = AppError::not_found("Divisi");
        assert_eq!(err.to_string(), "Divisi not found");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
