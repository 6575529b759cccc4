//! File-system primitives used by the linker.
use std::io;
use std::path::Path;

use crate::error::LinkError;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) with mode `0o755` on Unix.
///
/// # Errors
///
/// Returns [`LinkError::CreateDir`] if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<(), LinkError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt as _;
        builder.mode(0o755);
    }
    builder.create(parent).map_err(|source| LinkError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

/// Create a symlink at `link` pointing to `source`.
///
/// Never replaces an existing entry: if `link` exists the call fails with
/// [`io::ErrorKind::AlreadyExists`].
///
/// # Errors
///
/// Returns the underlying I/O error unchanged so callers can inspect its kind.
pub fn create_symlink(source: &Path, link: &Path) -> io::Result<()> {
    #[cfg(unix)]
    std::os::unix::fs::symlink(source, link)?;

    #[cfg(windows)]
    if source.is_dir() {
        std::os::windows::fs::symlink_dir(source, link)?;
    } else {
        std::os::windows::fs::symlink_file(source, link)?;
    }

    Ok(())
}
