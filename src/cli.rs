//! Command-line argument definitions.
use clap::Parser;

/// Default dotfiles location, relative to the home directory.
pub const DEFAULT_DOTFILES: &str = ".dotfiles";

/// Link every `*.symlink` entry of a dotfiles tree into the home directory.
#[derive(Parser, Debug)]
#[command(
    name = "dotlink",
    about = "Link marked dotfiles into the home directory",
    version = option_env!("DOTLINK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
)]
pub struct Cli {
    /// Turn on verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to dotfiles to link. If relative, assumed to be relative to user's home directory.
    #[arg(long, default_value = DEFAULT_DOTFILES)]
    pub dotfiles: std::path::PathBuf,

    /// Report what would be linked without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}
