//! Build script side of BuildLens.
//!
//! Each crate's `build.rs` calls [`emit`], which exports the variables read
//! back by `blcore::embedded_artifact!` and `blcore::build_env!`:
//! `BUILD_TIMESTAMP`, `GIT_SHA`, `GIT_TAG`, `BUILDLENS_INFORMATIONAL_VERSION`
//! and the forwarded `BUILDLENS_PRODUCT`, `BUILDLENS_COPYRIGHT`,
//! `BUILDLENS_TRADEMARK`.
use std::path::Path;
use std::process::Command;

pub const FORWARDED: [&str; 3] = [
    "BUILDLENS_PRODUCT",
    "BUILDLENS_COPYRIGHT",
    "BUILDLENS_TRADEMARK",
];

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn informational_version(version: &str, commit: &str) -> String {
    format!("{version}+{commit}")
}

/// Value exported for a forwarded variable: the environment first, then the
/// crate's default.
pub fn forwarded_value(
    key: &str,
    from_env: Option<String>,
    defaults: &[(&str, &str)],
) -> Option<String> {
    from_env.or_else(|| {
        defaults
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
}

/// Git paths, relative to the git dir, whose change can move HEAD to
/// another commit.
///
/// A branch ref may live in `packed-refs` until the next commit writes it
/// loose, so the directory holding it is watched rather than the file.
pub fn head_watch_list(head_ref: Option<&str>) -> Vec<String> {
    let mut names = vec!["HEAD".to_string(), "packed-refs".to_string()];
    if let Some(head_ref) = head_ref {
        let dir = head_ref
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .unwrap_or(head_ref);
        names.push(dir.to_string());
    }
    names
}

/// Prints the `cargo:` directives for the crate being built.
///
/// `defaults` supplies values for [`FORWARDED`] variables the environment
/// leaves unset.
pub fn emit(defaults: &[(&str, &str)]) {
    let ts = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", ts);

    if let Some(sha) = git(&["rev-parse", "--short", "HEAD"]) {
        println!("cargo:rustc-env=GIT_SHA={}", sha);
    }
    // Informational version carries the full commit as semver build metadata.
    if let Some(full) = git(&["rev-parse", "HEAD"]) {
        let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
        println!(
            "cargo:rustc-env=BUILDLENS_INFORMATIONAL_VERSION={}",
            informational_version(&version, &full)
        );
    }
    if let Some(tag) = git(&["describe", "--tags", "--abbrev=0"]) {
        println!("cargo:rustc-env=GIT_TAG={}", tag);
    }

    for key in FORWARDED {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Some(value) = forwarded_value(key, std::env::var(key).ok(), defaults) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }

    let head_ref = git(&["symbolic-ref", "-q", "HEAD"]);
    for name in head_watch_list(head_ref.as_deref()) {
        // `--git-path` resolves worktrees and the common dir.
        if let Some(path) = git(&["rev-parse", "--git-path", &name]) {
            if Path::new(&path).exists() {
                println!("cargo:rerun-if-changed={}", path);
            }
        }
    }
}
