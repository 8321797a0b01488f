//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors cover tree definitions that cannot become elements.
/// Building and rendering in memory never fail.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("invalid tree definition in {path}: {message}")]
    InvalidDefinition { path: PathBuf, message: String },

    #[error("element at {0} has an empty name")]
    EmptyName(String),
}
