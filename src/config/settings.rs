//! Resolved run settings: home directory and dotfiles root.
use std::path::{Path, PathBuf};

use crate::error::LinkError;

/// Paths and switches for a single run, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The user's home directory (target root).
    pub home: PathBuf,
    /// The dotfiles directory (source root).
    pub dotfiles: PathBuf,
    /// Report planned links without creating anything.
    pub dry_run: bool,
}

impl Settings {
    /// Resolve settings from the environment and the `--dotfiles` value.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::HomeDirUnavailable`] if the home directory cannot
    /// be determined.
    pub fn resolve(dotfiles: &Path, dry_run: bool) -> Result<Self, LinkError> {
        let home = home_dir()?;
        Ok(Self::with_home(home, dotfiles, dry_run))
    }

    /// Build settings for an explicit home directory.
    #[must_use]
    pub fn with_home(home: PathBuf, dotfiles: &Path, dry_run: bool) -> Self {
        let dotfiles = resolve_dotfiles(&home, dotfiles);
        Self {
            home,
            dotfiles,
            dry_run,
        }
    }
}

/// Resolve the dotfiles root: absolute paths are used as-is, relative paths
/// are taken relative to `home`.
#[must_use]
pub fn resolve_dotfiles(home: &Path, dotfiles: &Path) -> PathBuf {
    if dotfiles.is_absolute() {
        dotfiles.to_path_buf()
    } else {
        home.join(dotfiles)
    }
}

/// Current user's home directory.
///
/// Reads `HOME`, or `USERPROFILE` then `HOME` on Windows. Empty values are
/// treated as unset.
///
/// # Errors
///
/// Returns [`LinkError::HomeDirUnavailable`] if no usable variable is set.
pub fn home_dir() -> Result<PathBuf, LinkError> {
    let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty());
    let home = if cfg!(target_os = "windows") {
        var("USERPROFILE").or_else(|| var("HOME")).ok_or_else(|| {
            LinkError::HomeDirUnavailable(
                "neither USERPROFILE nor HOME environment variable is set".to_string(),
            )
        })?
    } else {
        var("HOME").ok_or_else(|| {
            LinkError::HomeDirUnavailable("HOME environment variable is not set".to_string())
        })?
    };
    Ok(PathBuf::from(home))
}
