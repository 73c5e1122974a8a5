//! Error types.
//!
//! Every error is fatal to the run: nothing is retried and no partial
//! output is produced once an error is detected.

use std::fmt;
use std::io;

use crate::validation::ValidationError;

/// Result alias used across the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Categories of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimErrorKind {
    /// Wrong command-line argument count or an unknown option value.
    InvalidArguments,
    /// The input file could not be opened or read.
    FileAccess,
    /// A CSV row has the wrong shape or a non-integer field.
    MalformedInput,
    /// The report could not be written.
    Output,
}

/// A simulation error.
#[derive(Debug)]
pub struct SimError {
    /// Error category.
    pub kind: SimErrorKind,
    /// Human-readable description.
    pub message: String,
    /// 1-based input line, for `MalformedInput`.
    pub line: Option<usize>,
    source: Option<io::Error>,
}

impl SimError {
    fn new(kind: SimErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
            source: None,
        }
    }

    /// Creates an invalid-arguments error.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(SimErrorKind::InvalidArguments, message)
    }

    /// Creates a file-access error wrapping the underlying I/O failure.
    pub fn file_access(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            source: Some(source),
            ..Self::new(SimErrorKind::FileAccess, message)
        }
    }

    /// Creates an output error wrapping the underlying I/O failure.
    pub fn output(source: io::Error) -> Self {
        Self {
            source: Some(source),
            ..Self::new(SimErrorKind::Output, "error writing report")
        }
    }

    /// Creates a malformed-input error for a given line.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            ..Self::new(SimErrorKind::MalformedInput, message)
        }
    }

    /// Folds validation failures into one malformed-input error.
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(SimErrorKind::MalformedInput, message)
    }
}

impl fmt::Display for SimErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SimErrorKind::InvalidArguments => "invalid args",
            SimErrorKind::FileAccess => "file access error",
            SimErrorKind::MalformedInput => "malformed input",
            SimErrorKind::Output => "output error",
        };
        f.write_str(label)
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {}): {}", self.kind, line, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
