//! Core logging types: severity, per-entry link events, and the [`Log`] trait.
use std::path::PathBuf;

/// Severity of a [`LinkEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Diagnostic detail, shown only with `--verbose`.
    Debug,
    /// Normal progress.
    Info,
    /// A conflict or skipped entry that needs the user's attention.
    Warn,
    /// A failed operation on a single entry.
    Error,
}

/// Outcome of visiting one entry of the dotfiles tree.
///
/// Every variant maps to exactly one log line. Field names used when the
/// event is rendered (`homePath`, `dotsPath`, `linkedTarget`, `path`, `file`,
/// `error`) are stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// A new symlink was created.
    Linked {
        /// Source entry in the dotfiles tree.
        dots_path: PathBuf,
        /// Link created under the home directory.
        home_path: PathBuf,
    },
    /// Dry run: a symlink would have been created.
    WouldLink {
        /// Source entry in the dotfiles tree.
        dots_path: PathBuf,
        /// Link that would be created under the home directory.
        home_path: PathBuf,
    },
    /// The destination already links to the source entry.
    AlreadyLinked {
        /// Existing link under the home directory.
        home_path: PathBuf,
    },
    /// The destination is a symlink to somewhere else; left untouched.
    ForeignLink {
        /// Existing link under the home directory.
        home_path: PathBuf,
        /// Where the existing link points.
        linked_target: PathBuf,
    },
    /// The destination exists and is not a symlink; left untouched.
    Occupied {
        /// Occupied path under the home directory.
        path: PathBuf,
    },
    /// Creating the symlink failed for a reason other than an existing entry.
    LinkFailed {
        /// Link that could not be created.
        home_path: PathBuf,
        /// Underlying error message.
        error: String,
    },
    /// `lstat` on an existing destination failed.
    StatFailed {
        /// Destination that could not be inspected.
        home_path: PathBuf,
        /// Underlying error message.
        error: String,
    },
    /// `readlink` on an existing destination symlink failed.
    ReadlinkFailed {
        /// Destination symlink that could not be read.
        home_path: PathBuf,
        /// Underlying error message.
        error: String,
    },
    /// The walk could not visit an entry.
    VisitFailed {
        /// Entry that could not be visited.
        file: PathBuf,
        /// Underlying error message.
        error: String,
    },
}

impl LinkEvent {
    /// Severity this event is logged at.
    #[must_use]
    pub const fn level(&self) -> Level {
        match self {
            Self::AlreadyLinked { .. } | Self::Occupied { .. } => Level::Debug,
            Self::Linked { .. } | Self::WouldLink { .. } => Level::Info,
            Self::ForeignLink { .. } | Self::VisitFailed { .. } => Level::Warn,
            Self::LinkFailed { .. } | Self::StatFailed { .. } | Self::ReadlinkFailed { .. } => {
                Level::Error
            }
        }
    }

    /// Fixed human-readable message for this event.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Linked { .. } => "Symlinked source file",
            Self::WouldLink { .. } => "Would symlink source file",
            Self::AlreadyLinked { .. } => "Already symlinked",
            Self::ForeignLink { .. } => {
                "Existing file points to different target, not symlinking!"
            }
            Self::Occupied { .. } => "Existing file at path, not symlinking!",
            Self::LinkFailed { .. } => "Unable to create symlink at homePath due to error",
            Self::StatFailed { .. } => "Unable to stat existing file",
            Self::ReadlinkFailed { .. } => "Unable to `readlink` on existing symlink",
            Self::VisitFailed { .. } => "Got an error visiting file",
        }
    }

    /// Structured fields in rendering order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let show = |p: &PathBuf| p.display().to_string();
        match self {
            Self::Linked {
                dots_path,
                home_path,
            }
            | Self::WouldLink {
                dots_path,
                home_path,
            } => vec![("dotsPath", show(dots_path)), ("homePath", show(home_path))],
            Self::AlreadyLinked { home_path } => vec![("homePath", show(home_path))],
            Self::ForeignLink {
                home_path,
                linked_target,
            } => vec![
                ("homePath", show(home_path)),
                ("linkedTarget", show(linked_target)),
            ],
            Self::Occupied { path } => vec![("path", show(path))],
            Self::LinkFailed { home_path, error }
            | Self::StatFailed { home_path, error }
            | Self::ReadlinkFailed { home_path, error } => {
                vec![("homePath", show(home_path)), ("error", error.clone())]
            }
            Self::VisitFailed { file, error } => {
                vec![("file", show(file)), ("error", error.clone())]
            }
        }
    }
}

/// Reporter for link outcomes.
///
/// [`Logger`](super::logger::Logger) forwards to `tracing`;
/// [`BufferedLog`](super::buffered::BufferedLog) keeps everything in memory.
/// The linker only ever talks to this trait.
pub trait Log: Send + Sync {
    /// Report the outcome of one dotfiles entry.
    fn record(&self, event: &LinkEvent);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message.
    fn debug(&self, msg: &str);
}
