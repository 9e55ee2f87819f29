use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoferError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API request failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response from {service}: {detail}")]
    UnexpectedResponse { service: String, detail: String },

    #[error("Unknown genre: {label}")]
    UnknownGenre { label: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("No results for \"{query}\"")]
    NoResults { query: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserInput,
    Upstream,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GoferError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GoferError::UnknownGenre { .. } | GoferError::InvalidInput { .. } => {
                ErrorCategory::UserInput
            }
            GoferError::ApiError(_)
            | GoferError::RetriesExhausted { .. }
            | GoferError::UnexpectedResponse { .. }
            | GoferError::NoResults { .. } => ErrorCategory::Upstream,
            GoferError::ConfigError { .. }
            | GoferError::MissingConfigError { .. }
            | GoferError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GoferError::IoError(_) | GoferError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 空結果是合法的結果，不算失敗
            GoferError::NoResults { .. } => ErrorSeverity::Low,
            GoferError::ApiError(_)
            | GoferError::RetriesExhausted { .. }
            | GoferError::UnexpectedResponse { .. } => ErrorSeverity::Medium,
            GoferError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 對應到唯一一種用戶可見的訊息類別
    pub fn user_friendly_message(&self) -> String {
        match self {
            GoferError::UnknownGenre { .. } | GoferError::InvalidInput { .. } => self.to_string(),
            GoferError::NoResults { query } => format!("Nothing found for \"{}\".", query),
            GoferError::ApiError(_)
            | GoferError::RetriesExhausted { .. }
            | GoferError::UnexpectedResponse { .. } => {
                "Something went wrong talking to the upstream service. Please try again later."
                    .to_string()
            }
            GoferError::ConfigError { .. }
            | GoferError::MissingConfigError { .. }
            | GoferError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            GoferError::IoError(_) | GoferError::SerializationError(_) => {
                format!("Internal error: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GoferError::UnknownGenre { .. } => format!(
                "Valid genres: {}",
                crate::core::genres::labels().join(", ")
            ),
            GoferError::InvalidInput { .. } => {
                "Check the command arguments and try again.".to_string()
            }
            GoferError::NoResults { .. } => {
                "Try a different search term or genre.".to_string()
            }
            GoferError::ApiError(_)
            | GoferError::RetriesExhausted { .. }
            | GoferError::UnexpectedResponse { .. } => {
                "The upstream API may be down or rate limiting; retry in a moment.".to_string()
            }
            GoferError::MissingConfigError { field } => format!(
                "Set the value in the config file or environment (field: {})",
                field
            ),
            GoferError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and re-run.".to_string()
            }
            GoferError::ConfigError { .. } => {
                "Check the configuration file syntax.".to_string()
            }
            GoferError::IoError(_) => "Check file permissions and paths.".to_string(),
            GoferError::SerializationError(_) => {
                "The upstream payload did not match the expected shape.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GoferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_surface_verbatim() {
        let err = GoferError::UnknownGenre {
            label: "Atlantis".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Unknown genre: Atlantis");
        assert_eq!(err.category(), ErrorCategory::UserInput);
    }

    #[test]
    fn empty_results_are_low_severity() {
        let err = GoferError::NoResults {
            query: "Comedy".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("Nothing found"));
    }

    #[test]
    fn unknown_genre_suggestion_lists_valid_labels() {
        let err = GoferError::UnknownGenre {
            label: "Atlantis".to_string(),
        };
        let suggestion = err.recovery_suggestion();
        assert!(suggestion.contains("Comedy"));
        assert!(suggestion.contains("Western"));
    }
}
