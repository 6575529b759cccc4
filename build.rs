//! Stamps `DOTLINK_VERSION` into the binary for `--version`.
use std::path::PathBuf;
use std::process::Command;

const VERSION_ENV: &str = "DOTLINK_VERSION";

/// Run git in the package directory and return trimmed stdout on success.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Version from the checkout, watching its git directory for new commits or tags.
fn version_from_checkout() -> Option<String> {
    let git_dir = PathBuf::from(git(&["rev-parse", "--absolute-git-dir"])?);
    for watched in ["HEAD", "refs", "packed-refs"] {
        println!("cargo:rerun-if-changed={}", git_dir.join(watched).display());
    }
    git(&["describe", "--tags", "--always", "--dirty"])
}

fn main() {
    println!("cargo:rerun-if-env-changed={VERSION_ENV}");
    let version = std::env::var(VERSION_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(version_from_checkout);
    if let Some(version) = version {
        println!("cargo:rustc-env={VERSION_ENV}={version}");
    }
}
