//! Error types for loading, transforming and writing themes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a [`ThemeError`].
///
/// Parse-class errors abort a build before anything is written. Filesystem
/// errors are reported per file; a build with any filesystem failure is
/// reported as failed as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed YAML, a bad custom tag, or an invalid value in the document.
    Parse,
    /// The source could not be read or an output could not be written.
    Filesystem,
}

/// Errors that can occur while building themes.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The palette source could not be read.
    #[error("failed to read palette source {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// YAML syntax or schema error.
    #[error("failed to parse palette source: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A custom tag was applied to a sequence of the wrong length.
    #[error("tag '!{tag}' expects {expected} elements, got {actual}")]
    TagArity {
        tag: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A custom tag was applied to something other than a sequence of strings.
    #[error("tag '!{tag}' expects a sequence of strings")]
    TagElement { tag: &'static str },

    /// A tag that no constructor is registered for.
    #[error("unknown tag '{0}'")]
    UnknownTag(String),

    /// A color value that is not a hex color.
    #[error("invalid color '{value}' for '{key}'")]
    InvalidColor { key: String, value: String },

    /// A `fontStyle` containing an unrecognized flag.
    #[error("invalid fontStyle '{value}' in token rule {rule}")]
    InvalidFontStyle { rule: usize, value: String },

    /// A theme could not be serialized to JSON.
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A theme file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One or more theme files failed to write.
    #[error("{} of {total} theme files failed to write: {}", .failures.len(), summarize(.failures))]
    Incomplete {
        failures: Vec<ThemeError>,
        total: usize,
    },
}

impl ThemeError {
    /// Returns whether this is a parse-class or filesystem-class error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ThemeError::Parse(_)
            | ThemeError::TagArity { .. }
            | ThemeError::TagElement { .. }
            | ThemeError::UnknownTag(_)
            | ThemeError::InvalidColor { .. }
            | ThemeError::InvalidFontStyle { .. }
            | ThemeError::Serialize(_) => ErrorKind::Parse,
            ThemeError::Read { .. }
            | ThemeError::CreateDir { .. }
            | ThemeError::Write { .. }
            | ThemeError::Incomplete { .. } => ErrorKind::Filesystem,
        }
    }

    pub(crate) fn invalid_color(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            key: key.into(),
            value: value.into(),
        }
    }
}

fn summarize(failures: &[ThemeError]) -> String {
    failures
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
