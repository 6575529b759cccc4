//! Run configuration resolved from flags and the environment.
pub mod settings;

pub use settings::{Settings, home_dir, resolve_dotfiles};
