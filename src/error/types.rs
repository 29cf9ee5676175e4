// src/error/types.rs
use crate::domain::{DomainError, SourceKind};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{museum} API returned status: {status}")]
    Upstream { museum: SourceKind, status: u16 },

    #[error("Failed to decode {museum} response: {message}")]
    Decode { museum: SourceKind, message: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(format!("Invalid config file: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
