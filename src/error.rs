//! Error handling for the pl2dist application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for pl2dist operations.
///
/// Fatal conditions (an output tree that already exists, a failed directory
/// creation) travel through this enum to [`default_error_handler`]; the
/// recoverable conditions are handled in place with a logged warning.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised while walking a directory tree
    #[error("Walk error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// The output tree would clobber a previous scaffold
    #[error("The output directory '{out_dir}' already exists.\nMove it out of the way or delete it, then run pl2dist again.")]
    OutputDirectoryExists { out_dir: String },

    /// The script argument has no final path component to name the tree after
    #[error("Cannot determine a script name from '{path}'.")]
    ScriptName { path: String },

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors in producing the MANIFEST listing
    #[error("Manifest error: {0}.")]
    ManifestError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
