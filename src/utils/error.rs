use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{entity} with id {id} not found")]
    NotFoundError { entity: &'static str, id: u64 },

    #[error("Authentication failed for user '{username}'")]
    AuthenticationError { username: String },

    #[error("User {user_id} lacks permission for this operation")]
    PermissionError { user_id: u64 },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
    Access,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SampleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SampleError::IoError(_) => ErrorCategory::Io,
            SampleError::ConfigValidationError { .. }
            | SampleError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SampleError::AuthenticationError { .. } | SampleError::PermissionError { .. } => {
                ErrorCategory::Access
            }
            _ => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SampleError::IoError(_) => ErrorSeverity::Critical,
            SampleError::ConfigValidationError { .. }
            | SampleError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SampleError::NotFoundError { .. } => ErrorSeverity::Medium,
            SampleError::AuthenticationError { .. } | SampleError::PermissionError { .. } => {
                ErrorSeverity::Medium
            }
            SampleError::DivisionByZero => ErrorSeverity::Low,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SampleError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            SampleError::CsvError(_) => {
                "Check the seed file for malformed rows or a missing header".to_string()
            }
            SampleError::NotFoundError { entity, .. } => {
                format!("Verify the {} id against the seeded records", entity)
            }
            SampleError::AuthenticationError { .. } => {
                "Check the username and password".to_string()
            }
            SampleError::PermissionError { .. } => {
                "Use an account that is allowed to update profiles".to_string()
            }
            SampleError::DivisionByZero => "Use a non-zero divisor".to_string(),
            SampleError::ConfigValidationError { field, .. }
            | SampleError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration", field)
            }
            _ => "Re-run with --verbose for more detail".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SampleError::IoError(e) => format!("File access failed: {}", e),
            SampleError::CsvError(e) => format!("Could not read seed file: {}", e),
            SampleError::NotFoundError { entity, id } => {
                format!("No {} exists with id {}", entity, id)
            }
            SampleError::AuthenticationError { username } => {
                format!("Login failed for '{}'", username)
            }
            SampleError::PermissionError { user_id } => {
                format!("User {} is not allowed to do that", user_id)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SampleError>;
