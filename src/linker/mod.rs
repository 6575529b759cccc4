//! Walk a dotfiles tree and link every marked entry into the home directory.
//!
//! For each entry whose name ends with the marker suffix the linker
//!
//! 1. maps it to a destination under the target root ([`paths::map_to_target_path`]),
//! 2. creates the destination's parent directories ([`fs::ensure_dir`]),
//! 3. creates the symlink, or classifies whatever is already there
//!    ([`conflict::handle_existing_file`]).
//!
//! Existing entries are never replaced. Per-entry problems are reported
//! through [`Log`] and the walk continues; only configuration-level failures
//! end the run with a [`LinkError`].
pub mod conflict;
pub mod fs;
pub mod paths;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Settings;
use crate::error::LinkError;
use crate::logging::{LinkEvent, Log};

/// Suffix that marks an entry of the dotfiles tree for linking.
pub const MARKER_SUFFIX: &str = ".symlink";

/// Counts of per-entry outcomes for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkSummary {
    /// Links created (or, in a dry run, links that would be created).
    pub linked: u32,
    /// Destinations that already linked to their source.
    pub already_linked: u32,
    /// Destinations occupied by a foreign symlink or a non-symlink entry.
    pub conflicts: u32,
    /// Entries that could not be visited, inspected or linked.
    pub errors: u32,
}

impl LinkSummary {
    fn tally(&mut self, event: &LinkEvent) {
        match event {
            LinkEvent::Linked { .. } | LinkEvent::WouldLink { .. } => self.linked += 1,
            LinkEvent::AlreadyLinked { .. } => self.already_linked += 1,
            LinkEvent::ForeignLink { .. } | LinkEvent::Occupied { .. } => self.conflicts += 1,
            LinkEvent::LinkFailed { .. }
            | LinkEvent::StatFailed { .. }
            | LinkEvent::ReadlinkFailed { .. }
            | LinkEvent::VisitFailed { .. } => self.errors += 1,
        }
    }
}

/// Links marked entries of `source_root` into `target_root`.
#[derive(Debug, Clone)]
pub struct Linker {
    source_root: PathBuf,
    target_root: PathBuf,
    marker_suffix: String,
    dry_run: bool,
}

impl Linker {
    /// Create a linker for the given roots and marker suffix.
    #[must_use]
    pub fn new(
        source_root: impl Into<PathBuf>,
        target_root: impl Into<PathBuf>,
        marker_suffix: impl Into<String>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            target_root: target_root.into(),
            marker_suffix: marker_suffix.into(),
            dry_run: false,
        }
    }

    /// Create a linker from resolved [`Settings`] using [`MARKER_SUFFIX`].
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.dotfiles, &settings.home, MARKER_SUFFIX).dry_run(settings.dry_run)
    }

    /// Only report what would be linked; create nothing.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Walk the source tree and link every marked entry.
    ///
    /// Entries are visited depth-first in file-name order. A marked directory
    /// is linked as a whole and its contents are still walked, so marked
    /// entries inside it get their own links under the unstripped path.
    ///
    /// # Errors
    ///
    /// Returns an error if the source root cannot be read, a visited path
    /// cannot be mapped, or a destination directory cannot be created.
    pub fn run(&self, log: &dyn Log) -> Result<LinkSummary, LinkError> {
        std::fs::metadata(&self.source_root).map_err(|source| LinkError::SourceUnreadable {
            path: self.source_root.clone(),
            source,
        })?;
        log.debug(&format!(
            "linking {} into {}",
            self.source_root.display(),
            self.target_root.display()
        ));

        let mut summary = LinkSummary::default();
        let walker = WalkDir::new(&self.source_root).sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let file = err
                        .path()
                        .map_or_else(|| self.source_root.clone(), Path::to_path_buf);
                    let event = LinkEvent::VisitFailed {
                        file,
                        error: err.to_string(),
                    };
                    summary.tally(&event);
                    log.record(&event);
                    continue;
                }
            };

            if entry.depth() == 0 || !paths::is_marked(entry.file_name(), &self.marker_suffix) {
                continue;
            }

            let event = self.link_entry(entry.path())?;
            summary.tally(&event);
            log.record(&event);
        }

        let verb = if self.dry_run { "would link" } else { "linked" };
        log.info(&format!(
            "{} {verb}, {} already ok, {} conflicts, {} errors",
            summary.linked, summary.already_linked, summary.conflicts, summary.errors
        ));
        Ok(summary)
    }

    /// Map, prepare and link a single marked entry.
    fn link_entry(&self, dots_path: &Path) -> Result<LinkEvent, LinkError> {
        let home_path = paths::map_to_target_path(
            &self.source_root,
            &self.target_root,
            dots_path,
            &self.marker_suffix,
        )?;

        if self.dry_run {
            return Ok(plan_link(&home_path, dots_path));
        }

        fs::ensure_dir(&home_path)?;
        Ok(symlink_file(&home_path, dots_path))
    }
}

/// Create the link, falling back to conflict classification if the
/// destination is taken.
fn symlink_file(home_path: &Path, dots_path: &Path) -> LinkEvent {
    match fs::create_symlink(dots_path, home_path) {
        Ok(()) => LinkEvent::Linked {
            dots_path: dots_path.to_path_buf(),
            home_path: home_path.to_path_buf(),
        },
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            conflict::handle_existing_file(home_path, dots_path)
        }
        Err(e) => LinkEvent::LinkFailed {
            home_path: home_path.to_path_buf(),
            error: e.to_string(),
        },
    }
}

/// Dry-run counterpart of [`symlink_file`]; reads but never writes.
fn plan_link(home_path: &Path, dots_path: &Path) -> LinkEvent {
    match std::fs::symlink_metadata(home_path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => LinkEvent::WouldLink {
            dots_path: dots_path.to_path_buf(),
            home_path: home_path.to_path_buf(),
        },
        _ => conflict::handle_existing_file(home_path, dots_path),
    }
}
