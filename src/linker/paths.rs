//! Marker matching and source-to-home path mapping.
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::LinkError;

/// Whether an entry name carries the marker suffix.
///
/// Compares raw name bytes, so names that are not valid UTF-8 still match.
/// A name that is exactly the suffix matches too.
#[must_use]
pub fn is_marked(name: &OsStr, suffix: &str) -> bool {
    name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

/// The part of `name` before `suffix`, or `None` if `name` does not end with it.
#[cfg(unix)]
fn strip_marker(name: &OsStr, suffix: &str) -> Option<OsString> {
    use std::os::unix::ffi::OsStrExt as _;
    name.as_bytes()
        .strip_suffix(suffix.as_bytes())
        .map(|stem| OsStr::from_bytes(stem).to_os_string())
}

#[cfg(windows)]
fn strip_marker(name: &OsStr, suffix: &str) -> Option<OsString> {
    use std::os::windows::ffi::{OsStrExt as _, OsStringExt as _};
    let wide: Vec<u16> = name.encode_wide().collect();
    let marker: Vec<u16> = suffix.encode_utf16().collect();
    wide.strip_suffix(marker.as_slice()).map(OsString::from_wide)
}

#[cfg(not(any(unix, windows)))]
fn strip_marker(name: &OsStr, suffix: &str) -> Option<OsString> {
    name.to_str()?.strip_suffix(suffix).map(OsString::from)
}

/// Map a marked source entry to its location under `target_root`.
///
/// `/d/a/b/c.txt.symlink` with source root `/d` and target root `/h` maps to
/// `/h/a/b/c.txt`. An entry named exactly the suffix maps to its parent
/// directory: `/d/a/.symlink` maps to `/h/a`.
///
/// # Errors
///
/// Returns [`LinkError::RelativePath`] if `path` is not below `source_root`.
pub fn map_to_target_path(
    source_root: &Path,
    target_root: &Path,
    path: &Path,
    suffix: &str,
) -> Result<PathBuf, LinkError> {
    let relative_path_error = || LinkError::RelativePath {
        path: path.to_path_buf(),
        root: source_root.to_path_buf(),
    };
    let rel = path
        .strip_prefix(source_root)
        .map_err(|_| relative_path_error())?;
    let name = rel.file_name().ok_or_else(relative_path_error)?;
    let rel = match strip_marker(name, suffix) {
        Some(stem) if stem.is_empty() => rel.parent().unwrap_or(Path::new("")).to_path_buf(),
        Some(stem) => rel.with_file_name(stem),
        None => rel.to_path_buf(),
    };
    if rel.as_os_str().is_empty() {
        return Ok(target_root.to_path_buf());
    }
    Ok(target_root.join(rel))
}

/// Compare two paths, normalising the `\\?\` prefix that Windows
/// `read_link` prepends to extended-length paths.
#[must_use]
pub fn paths_equal(a: &Path, b: &Path) -> bool {
    dunce::simplified(a) == dunce::simplified(b)
}
