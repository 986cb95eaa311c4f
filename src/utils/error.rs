use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Submission to '{resource}' failed: {message}")]
    SubmissionError { resource: String, message: String },

    #[error("Catalog '{catalog}' is inconsistent: {message}")]
    CatalogError { catalog: String, message: String },

    #[error("Unknown pricing plan: {0}")]
    UnknownPlan(String),
}

impl UiError {
    pub fn submission(resource: &str, message: impl Into<String>) -> Self {
        UiError::SubmissionError {
            resource: resource.to_string(),
            message: message.into(),
        }
    }

    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            UiError::HttpError(_) | UiError::SubmissionError { .. } => {
                "Sorry, there was an error submitting your request. Please try again.".to_string()
            }
            UiError::IoError(_) | UiError::SerializationError(_) => {
                "Your preferences could not be saved.".to_string()
            }
            UiError::ConfigError { message } => format!("Configuration problem: {}", message),
            UiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            UiError::CatalogError { catalog, .. } => {
                format!("The {} directory is temporarily unavailable.", catalog)
            }
            UiError::UnknownPlan(name) => format!("The plan '{}' does not exist.", name),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            UiError::HttpError(_) | UiError::SubmissionError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
