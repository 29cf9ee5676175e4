// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides consistent error format for front ends
// - Logs the full error for debugging

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;

/// Standard error response for front ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Artwork not in results or collection
    NotFound,

    /// Invalid input (blank term, unknown sort token)
    Validation,

    /// Domain invariant violation
    DomainError,

    /// Museum API unreachable or misbehaving
    ExternalService,

    /// Bad or unreadable configuration
    Configuration,

    /// File system error
    FileSystem,

    /// Other/unknown error
    Internal,
}

pub type CommandResult<T> = Result<T, ErrorResponse>;

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::not_found("Artwork"),

            AppError::InvalidRequest(message) => Self::validation(message),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::SearchFailed(message) => {
                log::error!("Search failed: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::ExternalService,
                    message: "Search failed".to_string(),
                    details: Some(message),
                }
            }

            error @ (AppError::Http(_) | AppError::Upstream { .. } | AppError::Decode { .. }) => {
                log::error!("Museum API error: {:?}", error);

                Self {
                    success: false,
                    error_type: ErrorType::ExternalService,
                    message: "Museum service error".to_string(),
                    details: Some(error.to_string()),
                }
            }

            AppError::Config(message) => Self {
                success: false,
                error_type: ErrorType::Configuration,
                message: "Invalid configuration".to_string(),
                details: Some(message),
            },

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

/// Helper trait to convert service results into command results
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> CommandResult<T>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> CommandResult<T> {
        self.map_err(ErrorResponse::from_app_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, SourceKind};

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Artwork not found");
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::from_app_error(AppError::InvalidRequest(
            "search term is empty".to_string(),
        ));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "search term is empty");
    }

    #[test]
    fn test_search_failure_keeps_cause_in_details() {
        let error = ErrorResponse::from_app_error(AppError::SearchFailed(
            "Victoria & Albert Museum API returned status: 503".to_string(),
        ));
        assert_eq!(error.error_type, ErrorType::ExternalService);
        assert_eq!(
            error.details.as_deref(),
            Some("Victoria & Albert Museum API returned status: 503")
        );
    }

    #[test]
    fn test_upstream_error_is_external() {
        let error = ErrorResponse::from_app_error(AppError::Upstream {
            museum: SourceKind::Cleveland,
            status: 500,
        });
        assert_eq!(error.error_type, ErrorType::ExternalService);
        assert!(!error.success);
    }

    #[test]
    fn test_domain_error() {
        let error = ErrorResponse::from_app_error(AppError::Domain(
            DomainError::InvariantViolation("duplicate id".to_string()),
        ));
        assert_eq!(error.error_type, ErrorType::DomainError);
        assert!(error.details.unwrap().contains("duplicate id"));
    }

    #[test]
    fn test_serializes_for_front_end() {
        let json = serde_json::to_value(ErrorResponse::not_found("Artwork")).unwrap();
        assert_eq!(json["error_type"], "not_found");
        assert_eq!(json["success"], false);
    }
}
