use crate::domain::state::Level;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid price '{value}'")]
    InvalidPrice { value: String },

    #[error("Unknown {level} selection '{value}'")]
    UnknownSelection { level: Level, value: String },

    #[error("Cannot select {level} before its parent selection")]
    SelectionOrder { level: Level },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Selection,
    Configuration,
}

impl BookingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookingError::Http(_) | BookingError::Status { .. } => ErrorCategory::Network,
            BookingError::Serialization(_) | BookingError::InvalidPrice { .. } => {
                ErrorCategory::Data
            }
            BookingError::UnknownSelection { .. }
            | BookingError::SelectionOrder { .. }
            | BookingError::InvalidUrl(_) => ErrorCategory::Selection,
            BookingError::Io(_)
            | BookingError::ConfigValidation { .. }
            | BookingError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                format!("Could not reach the booking service ({})", self)
            }
            ErrorCategory::Data => format!("The booking service sent unexpected data ({})", self),
            ErrorCategory::Selection => self.to_string(),
            ErrorCategory::Configuration => format!("Please check your configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
