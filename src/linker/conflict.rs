//! Classification of an entry that already occupies a link destination.
use std::path::Path;

use super::paths::paths_equal;
use crate::logging::LinkEvent;

/// Inspect the entry at `home_path` and decide what it means for linking
/// `dots_path` there.
///
/// Never modifies the filesystem:
/// - a symlink already pointing at `dots_path` is [`LinkEvent::AlreadyLinked`]
/// - a symlink pointing elsewhere is [`LinkEvent::ForeignLink`]
/// - anything else is [`LinkEvent::Occupied`]
pub fn handle_existing_file(home_path: &Path, dots_path: &Path) -> LinkEvent {
    let meta = match std::fs::symlink_metadata(home_path) {
        Ok(meta) => meta,
        Err(e) => {
            return LinkEvent::StatFailed {
                home_path: home_path.to_path_buf(),
                error: e.to_string(),
            };
        }
    };

    if !meta.file_type().is_symlink() {
        return LinkEvent::Occupied {
            path: home_path.to_path_buf(),
        };
    }

    match std::fs::read_link(home_path) {
        Err(e) => LinkEvent::ReadlinkFailed {
            home_path: home_path.to_path_buf(),
            error: e.to_string(),
        },
        Ok(linked_target) if paths_equal(&linked_target, dots_path) => LinkEvent::AlreadyLinked {
            home_path: home_path.to_path_buf(),
        },
        Ok(linked_target) => LinkEvent::ForeignLink {
            home_path: home_path.to_path_buf(),
            linked_target,
        },
    }
}
