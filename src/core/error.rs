//! Typed errors raised by the analysis core.

use std::{io, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

use crate::core::data::Category;

/// Per-file failures during a project scan.
///
/// None of these abort a scan: the offending file is skipped and the error is
/// surfaced as a warning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unsupported file kind: {}", .path.display())]
    UnsupportedFileKind { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {} as UTF-8: {source}", .path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

impl ScanError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ScanError::UnsupportedFileKind { path }
            | ScanError::ReadFailure { path, .. }
            | ScanError::DecodeFailure { path, .. } => path,
        }
    }
}

/// Failure while assigning substitute tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    #[error(
        "token space exhausted for {category}: {required} identifiers but only {available} tokens up to length {max_token_length}"
    )]
    TokenSpaceExhausted {
        category: Category,
        required: usize,
        available: u64,
        max_token_length: usize,
    },
}

/// A third-party pattern that failed to compile.
#[derive(Debug, Error)]
#[error("invalid third-party pattern for {category}: \"{pattern}\"")]
pub struct PatternError {
    pub category: Category,
    pub pattern: String,
    #[source]
    pub source: Box<fancy_regex::Error>,
}
