//! Error types for mdsite operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while converting a document or building a site.
///
/// Every variant aborts the current document; no partial output is returned.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid syntax: odd number of `{delimiter}` delimiters in {text:?}")]
    DelimiterSyntax {
        delimiter: &'static str,
        text: String,
    },

    #[error("cannot serialize node: {0}")]
    Structural(String),

    #[error("document must begin with a level-1 heading block")]
    MissingTitle,

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
