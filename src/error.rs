use std::path::PathBuf;

use thiserror::Error;

use crate::state::data::CourseId;

/// Errors raised by the course store and the catalog loader
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate course id {0} in catalog")]
    DuplicateId(CourseId),

    #[error("no course with id {0}")]
    NotFound(CourseId),

    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Top-level error returned from `main`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("UI runtime error: {0}")]
    Ui(#[from] iced::Error),
}
