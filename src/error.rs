//! Fatal error types for the linker.
//!
//! Only configuration-level failures are represented here. Anything that
//! concerns a single dotfile (a conflicting destination, a permission error on
//! one link, an unreadable entry) is reported through the
//! [`Log`](crate::logging::Log) side-channel instead and never aborts a run.
//!
//! The binary converts these into [`anyhow::Error`] at the `main` boundary
//! via the standard `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that terminate a run.
#[derive(Error, Debug)]
pub enum LinkError {
    /// Neither `HOME` nor (on Windows) `USERPROFILE` is set.
    #[error("Unable to get user's home directory: {0}")]
    HomeDirUnavailable(String),

    /// The dotfiles directory could not be opened for walking.
    #[error("Unable to walk dotfiles directory {path}: {source}")]
    SourceUnreadable {
        /// Root of the dotfiles tree.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A visited path is not located under the dotfiles root.
    #[error("Unable to get relative dots file path for {path} (root {root})")]
    RelativePath {
        /// Path reported by the walk.
        path: PathBuf,
        /// Root of the dotfiles tree.
        root: PathBuf,
    },

    /// A parent directory for a link could not be created.
    #[error("Unable to create target directory for symlink {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
