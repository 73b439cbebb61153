//! Error handling for blank-project.
//! Defines the error taxonomy and result alias used throughout the crate.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can abort a project build.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed configuration, reported before any filesystem work
    #[error("Invalid configuration: {0}.")]
    InvalidConfig(String),

    /// Any filesystem failure, tagged with the path being processed
    #[error("IO error at '{}': {source}.", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rendering failure: undefined variable, malformed template or non-template path
    #[error("Template error in '{path}': {message}.")]
    TemplateError { path: String, message: String },

    /// Requested path does not exist in the template tree
    #[error("Template file not found: '{0}'.")]
    NotFound(String),
}

impl Error {
    /// Wraps an [`io::Error`] together with the path it occurred on.
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Error::IoError { path: path.as_ref().to_path_buf(), source }
    }

    pub fn template<S: Into<String>, M: ToString>(path: S, message: M) -> Self {
        Error::TemplateError { path: path.into(), message: message.to_string() }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
