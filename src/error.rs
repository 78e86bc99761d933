//! Error types for descriptor loading and file generation

use std::fmt;
use std::io;
use std::path::PathBuf;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::substitute::PlaceholderError;

/// Coarse classification of a [`GenerateError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A descriptor is missing its `types_list` binding
    Configuration,
    /// A descriptor could not be read, parsed or compiled
    Load,
    /// A template could not be read or an output could not be written
    Io,
}

/// Which side of a generation step failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    ReadTemplate,
    WriteOutput,
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoOperation::ReadTemplate => f.write_str("read template"),
            IoOperation::WriteOutput => f.write_str("write output"),
        }
    }
}

/// Errors that abort a generation run
///
/// The underlying cause is part of each message rather than exposed through
/// `source()`, so printing the top-level error shows it exactly once.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Descriptor parsed but does not define `types_list`
    #[error("types_list not found in descriptor '{}'", .path.display())]
    Configuration { path: PathBuf },

    /// Descriptor could not be turned into type records
    #[error("failed to load descriptor '{}': {failure}", .path.display())]
    Load {
        path: PathBuf,
        failure: LoadFailure,
    },

    /// Template or destination I/O failed
    #[error("failed to {op} '{}': {error}", .path.display())]
    Io {
        op: IoOperation,
        path: PathBuf,
        error: io::Error,
    },

    /// Template path has no file name to derive an output name from
    #[error("template path '{}' has no file name", .path.display())]
    InvalidTemplatePath { path: PathBuf },
}

/// Why a descriptor failed to load
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("{0}")]
    Read(io::Error),

    #[error("{}", describe_toml_error(.error, .text))]
    Parse { error: toml::de::Error, text: String },

    #[error("types_list is not a list")]
    NotAList,

    #[error("types_list[{index}] is not a table")]
    InvalidEntry { index: usize },

    #[error("types_list[{index}].{key} is not a string")]
    InvalidValue { index: usize, key: String },

    #[error("types_list[{index}]: {error}")]
    InvalidKey {
        index: usize,
        error: PlaceholderError,
    },
}

impl GenerateError {
    /// Create a load error for a descriptor
    pub fn load(path: impl Into<PathBuf>, failure: LoadFailure) -> Self {
        Self::Load {
            path: path.into(),
            failure,
        }
    }

    /// Create an I/O error for a template or destination path
    pub fn io(op: IoOperation, path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            error,
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Load { .. } => ErrorKind::Load,
            Self::Io { .. } | Self::InvalidTemplatePath { .. } => ErrorKind::Io,
        }
    }

    /// Format the error for a terminal
    ///
    /// Descriptor syntax errors are rendered with ariadne against the
    /// descriptor text; everything else falls back to `Display`.
    pub fn format(&self) -> String {
        let Self::Load {
            path,
            failure: LoadFailure::Parse { error, text },
        } = self
        else {
            return self.to_string();
        };

        let name = path.display().to_string();
        let filename = name.as_str();
        // toml spans are byte offsets into `text`
        let span = error.span().unwrap_or(0..0);
        let mut buf = Vec::new();

        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_config(
                Config::default()
                    .with_color(false)
                    .with_index_type(IndexType::Byte),
            )
            .with_message(format!("invalid descriptor '{}'", filename))
            .with_label(Label::new((filename, span)).with_message(error.message()))
            .finish()
            .write((filename, Source::from(text.as_str())), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// One-line description of a TOML error with its line and column
fn describe_toml_error(error: &toml::de::Error, text: &str) -> String {
    match error.span() {
        Some(span) => {
            let (line, column) = line_column(text, span.start);
            format!("{} at line {}, column {}", error.message(), line, column)
        }
        None => error.message().to_string(),
    }
}

/// 1-based line and column of a byte offset
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let before = text.get(..offset).unwrap_or(text);
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.chars().count(), |nl| before[nl + 1..].chars().count())
        + 1;
    (line, column)
}
