//! Error types for Cloudsketch operations.
//!
//! This module provides the main error type [`CloudsketchError`] which wraps
//! the conditions that can stop a generation run.

use std::io;

use thiserror::Error;

use cloudsketch_core::DiagramError;

use crate::export;

/// The main error type for Cloudsketch operations.
///
/// [`CloudsketchError::MissingBackend`] is kept apart from every other
/// failure so callers can print an installation hint for it.
#[derive(Debug, Error)]
pub enum CloudsketchError {
    #[error("Graphviz `dot` executable could not be started")]
    MissingBackend(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Diagram error: {0}")]
    Diagram(#[from] DiagramError),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<export::Error> for CloudsketchError {
    fn from(error: export::Error) -> Self {
        match error {
            export::Error::MissingBackend(err) => Self::MissingBackend(err),
            export::Error::Render(msg) => Self::Render(msg),
            export::Error::Io(err) => Self::Io(err),
        }
    }
}

impl From<askama::Error> for CloudsketchError {
    fn from(error: askama::Error) -> Self {
        Self::Render(error.to_string())
    }
}

impl CloudsketchError {
    /// Returns `true` when the rendering backend is not installed.
    pub fn is_missing_backend(&self) -> bool {
        matches!(self, Self::MissingBackend(_))
    }
}
