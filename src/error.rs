use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for track generation.
#[derive(Debug, Error)]
pub enum LiftupError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the structure of a track document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("missing field: {0}")]
    MissingField(String),

    #[error("value at `{path}` is not {expected}")]
    InvalidShape {
        path: String,
        expected: &'static str,
    },

    #[error("invalid blueprint: {0}")]
    InvalidBlueprint(String),
}

/// Errors raised by the file collaborators.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// Errors related to encoding and decoding documents.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unclosed element <{0}>")]
    Unclosed(String),

    #[error("document is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("config: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<serde_json::Error> for LiftupError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Json(err).into()
    }
}

impl From<quick_xml::Error> for LiftupError {
    fn from(err: quick_xml::Error) -> Self {
        FormatError::Xml(err).into()
    }
}

/// Convenience type alias for results using [`LiftupError`].
pub type Result<T> = std::result::Result<T, LiftupError>;
