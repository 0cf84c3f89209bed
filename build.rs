//! Injects LANGCEN_VERSION and LANGCEN_GIT_SHA for the page footer.
//!
//! CI sets both explicitly; local builds fall back to the crate version and
//! `git rev-parse`.

use std::env;
use std::process::Command;

fn git_short_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    let version = env::var("LANGCEN_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());

    let git_sha = env::var("LANGCEN_GIT_SHA")
        .ok()
        .or_else(git_short_sha)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=LANGCEN_VERSION={}", version);
    println!("cargo:rustc-env=LANGCEN_GIT_SHA={}", git_sha);
    println!("cargo:rerun-if-env-changed=LANGCEN_VERSION");
    println!("cargo:rerun-if-env-changed=LANGCEN_GIT_SHA");
}
