//! Dotfiles linker.
//!
//! Walks a dotfiles tree and symlinks every entry whose name ends in
//! `.symlink` into the home directory, keeping the directory structure and
//! dropping the suffix. Existing files and foreign symlinks are reported,
//! never replaced.
//!
//! - **[`config`]** — resolve the home directory and the dotfiles root
//! - **[`linker`]** — walk, map, prepare and link
//! - **[`logging`]** — the [`logging::Log`] reporter and its backends
//! - **[`error`]** — fatal errors
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod config;
pub mod error;
pub mod linker;
pub mod logging;
