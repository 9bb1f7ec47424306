//! Migration-specific error types

use thiserror::Error;

/// Errors raised while turning a declaration site into a migration record
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The file name has an identifier but no `_`-separated description
    #[error(
        "migration description is required: {file}\n\
         Identifier '{identifier}' was found but the file name has no description.\n\
         Suggestion: rename the file to {identifier}_<description>.<ext>"
    )]
    MissingDescription {
        /// Identifier parsed from the file name, kept for diagnostics
        identifier: String,
        /// File path the identifier was parsed from
        file: String,
    },

    /// No caller frame could be resolved at the requested depth
    #[error("invalid call site: could not resolve caller frame at skip {skip}: {reason}")]
    InvalidCallSite { skip: usize, reason: String },

    /// Builder options could not be loaded
    #[error("invalid migration options: {0}")]
    Config(#[from] config::ConfigError),

    /// Raised by the aborting entry points; treat as a startup failure
    #[error("failed to get migration ID: {0}")]
    Fatal(Box<MigrationError>),
}

/// Classification of a [`MigrationError`], looking through [`MigrationError::Fatal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingDescription,
    InvalidCallSite,
    Config,
}

impl MigrationError {
    /// The underlying kind of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MigrationError::MissingDescription { .. } => ErrorKind::MissingDescription,
            MigrationError::InvalidCallSite { .. } => ErrorKind::InvalidCallSite,
            MigrationError::Config(_) => ErrorKind::Config,
            MigrationError::Fatal(inner) => inner.kind(),
        }
    }

    /// Whether this error was escalated by an aborting entry point
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, MigrationError::Fatal(_))
    }

    /// Wrap this error as [`MigrationError::Fatal`]; already fatal errors are returned as-is
    #[must_use]
    pub fn into_fatal(self) -> Self {
        match self {
            fatal @ MigrationError::Fatal(_) => fatal,
            other => MigrationError::Fatal(Box::new(other)),
        }
    }
}
