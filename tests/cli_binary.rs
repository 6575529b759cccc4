#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
//! End-to-end tests for the `dotlink` binary: flags, environment, exit codes
//! and the shape of the log output on stderr.

mod common;

use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with `home` as the home directory.
fn dotlink(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dotlink"))
        .args(args)
        .env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("DOTLINK_LOG")
        .output()
        .expect("spawn dotlink")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[cfg(unix)]
#[test]
fn relative_dotfiles_resolved_against_home() {
    let ctx = common::TestContextBuilder::new()
        .with_dotfile(".bashrc.symlink")
        .build();
    // dots/ lives next to home/, so reach it relative to home
    let output = dotlink(&ctx.home(), &["--dotfiles", "../dots"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        std::fs::read_link(ctx.home().join(".bashrc")).unwrap(),
        ctx.home().join("../dots/.bashrc.symlink")
    );
}

#[cfg(unix)]
#[test]
fn absolute_dotfiles_used_as_is() {
    let ctx = common::TestContextBuilder::new()
        .with_dotfile(".vimrc.symlink")
        .build();
    let dots = ctx.dots();
    let output = dotlink(&ctx.home(), &["--dotfiles", dots.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        std::fs::read_link(ctx.home().join(".vimrc")).unwrap(),
        dots.join(".vimrc.symlink")
    );
}

#[cfg(unix)]
#[test]
fn default_dotfiles_location_is_home_dot_dotfiles() {
    let ctx = common::LinkTestContext::new();
    let dotfiles = ctx.home().join(".dotfiles");
    std::fs::create_dir_all(&dotfiles).unwrap();
    std::fs::write(dotfiles.join(".profile.symlink"), "export A=1").unwrap();

    let output = dotlink(&ctx.home(), &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        std::fs::read_link(ctx.home().join(".profile")).unwrap(),
        dotfiles.join(".profile.symlink")
    );
}

#[test]
fn missing_dotfiles_directory_exits_non_zero() {
    let ctx = common::LinkTestContext::new();
    let output = dotlink(&ctx.home(), &["--dotfiles", "does-not-exist"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(
        err.contains("error=\"Unable to walk dotfiles directory"),
        "stderr: {err}"
    );
    let line = err.lines().find(|l| l.contains("dotlink aborted")).unwrap();
    assert!(line.starts_with("ERROR dotlink aborted"), "stderr: {err}");
    assert!(!err.contains("Error: "), "stderr: {err}");
}

#[test]
fn conflicts_still_exit_zero_and_warn() {
    let ctx = common::TestContextBuilder::new()
        .with_dotfile(".bashrc.symlink")
        .with_home_file(".bashrc", "mine")
        .build();
    #[cfg(unix)]
    std::os::unix::fs::symlink("/other/path", ctx.home().join(".zshrc")).unwrap();
    std::fs::write(ctx.dots().join(".zshrc.symlink"), "zsh").unwrap();

    let dots = ctx.dots();
    let output = dotlink(&ctx.home(), &["--dotfiles", dots.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        std::fs::read_to_string(ctx.home().join(".bashrc")).unwrap(),
        "mine"
    );
    #[cfg(unix)]
    {
        let err = stderr(&output);
        assert!(err.contains("WARN  Existing file points to different target"), "stderr: {err}");
        assert!(err.contains("linkedTarget=/other/path"), "stderr: {err}");
        // occupied destinations are debug-only
        assert!(!err.contains("Existing file at path"), "stderr: {err}");
    }
}

#[cfg(unix)]
#[test]
fn quiet_by_default_verbose_shows_debug() {
    let ctx = common::TestContextBuilder::new()
        .with_dotfile(".bashrc.symlink")
        .with_home_file(".bashrc", "mine")
        .with_dotfile(".inputrc.symlink")
        .build();
    let dots = ctx.dots();
    let dots = dots.to_str().unwrap();

    let quiet = dotlink(&ctx.home(), &["--dotfiles", dots]);
    assert!(quiet.status.success());
    assert!(stderr(&quiet).is_empty(), "stderr: {}", stderr(&quiet));

    std::fs::remove_file(ctx.home().join(".inputrc")).unwrap();
    let verbose = dotlink(&ctx.home(), &["-v", "--dotfiles", dots]);
    let err = stderr(&verbose);
    assert!(verbose.status.success());
    assert!(err.contains("INFO  Symlinked source file"), "stderr: {err}");
    assert!(err.contains("homePath="), "stderr: {err}");
    assert!(err.contains("DEBUG Existing file at path, not symlinking!"), "stderr: {err}");
    assert!(!err.contains('\x1b'), "no colours when stderr is not a terminal");
}

#[test]
fn dry_run_creates_nothing() {
    let ctx = common::TestContextBuilder::new()
        .with_dotfile("config/git/config.symlink")
        .build();
    let dots = ctx.dots();
    let output = dotlink(
        &ctx.home(),
        &["--dry-run", "-v", "--dotfiles", dots.to_str().unwrap()],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!ctx.home().join("config").exists());
    assert!(stderr(&output).contains("[dry run] Would symlink source file"));
}

#[test]
fn version_flag() {
    let ctx = common::LinkTestContext::new();
    let output = dotlink(&ctx.home(), &["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("dotlink "));
}
