// Shared helpers for integration tests.
//
// Provides a temporary directory holding a dotfiles tree and a home
// directory side by side, plus a fluent builder so each test can describe
// the starting state of both without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use dotlink::linker::{Linker, MARKER_SUFFIX};
use dotlink::logging::LinkEvent;

/// A dotfiles tree (`dots/`) and a home directory (`home/`) inside one
/// [`tempfile::TempDir`], deleted when dropped.
pub struct LinkTestContext {
    /// Temporary directory containing both trees.
    pub root: tempfile::TempDir,
}

impl LinkTestContext {
    /// Create a context with empty `dots/` and `home/` directories.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("dots")).expect("create dots dir");
        std::fs::create_dir_all(root.path().join("home")).expect("create home dir");
        Self { root }
    }

    /// Path to the dotfiles tree.
    pub fn dots(&self) -> PathBuf {
        self.root.path().join("dots")
    }

    /// Path to the home directory.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// A linker over this context's trees using the standard suffix.
    pub fn linker(&self) -> Linker {
        Linker::new(self.dots(), self.home(), MARKER_SUFFIX)
    }

    /// Render an event as `Level message key=value ...` with the temporary
    /// roots replaced by `<dots>` and `<home>`, for snapshotting.
    pub fn render(&self, event: &LinkEvent) -> String {
        let dots = self.dots().display().to_string();
        let home = self.home().display().to_string();
        let mut line = format!("{:?} {}", event.level(), event.message());
        for (key, value) in event.fields() {
            let value = value.replace(&dots, "<dots>").replace(&home, "<home>");
            line.push_str(&format!(" {key}={value}"));
        }
        line
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write file");
}

/// Fluent builder for [`LinkTestContext`].
pub struct TestContextBuilder {
    ctx: LinkTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context with empty trees.
    pub fn new() -> Self {
        Self {
            ctx: LinkTestContext::new(),
        }
    }

    /// Write a file at `rel` inside the dotfiles tree.
    pub fn with_dotfile(self, rel: &str) -> Self {
        write_file(&self.ctx.dots().join(rel), rel);
        self
    }

    /// Write a regular file at `rel` inside the home directory.
    pub fn with_home_file(self, rel: &str, content: &str) -> Self {
        write_file(&self.ctx.home().join(rel), content);
        self
    }

    /// Create a symlink at `rel` inside the home directory pointing at
    /// `target`.
    #[cfg(unix)]
    pub fn with_home_link(self, rel: &str, target: &Path) -> Self {
        let link = self.ctx.home().join(rel);
        if let Some(parent) = link.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::os::unix::fs::symlink(target, &link).expect("create home symlink");
        self
    }

    /// Create a symlink at `rel` inside the home directory pointing at the
    /// dotfiles entry `dotfile`, as a previous run would have.
    #[cfg(unix)]
    pub fn with_home_link_to_dotfile(self, rel: &str, dotfile: &str) -> Self {
        let target = self.ctx.dots().join(dotfile);
        self.with_home_link(rel, &target)
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> LinkTestContext {
        self.ctx
    }
}
