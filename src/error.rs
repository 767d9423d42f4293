//! Error handling for evemu-rs
//!
//! This module defines the error taxonomy for reading, transforming and
//! writing recordings, and a Result alias for use throughout the crate.
//!
//! Malformed event lines are not errors: the parser drops them and keeps
//! going. Merge and repeat cannot fail. Everything that can go wrong here is
//! either I/O or a bad invocation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for evemu-rs operations
#[derive(Error, Debug)]
pub enum EvemuError {
    /// The input could not be opened or located
    #[error("Cannot open {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred while reading an opened input
    #[error("Failed to read recording")]
    ReadFailure(#[source] io::Error),

    /// The output could not be created
    #[error("Cannot create {}", path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred while writing or flushing the output
    #[error("Failed to write recording")]
    WriteFailure(#[source] io::Error),

    /// Invalid command-line invocation
    #[error("{0}")]
    Usage(String),

    /// Errors related to configuration loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors with context; the cause is reachable through `source()`
    #[error("{context}")]
    WithContext {
        context: String,
        #[source]
        source: Box<EvemuError>,
    },
}

impl EvemuError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        EvemuError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Strip any context layers and return the underlying error
    pub fn root(&self) -> &EvemuError {
        match self {
            EvemuError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }

    /// Whether the input could not be located or opened at all, as opposed
    /// to failing part-way through a read
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self.root(), EvemuError::SourceUnavailable { .. })
    }
}

/// Result type alias for evemu-rs operations
pub type Result<T> = std::result::Result<T, EvemuError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
