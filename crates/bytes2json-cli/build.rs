//! Stamps the git commit and commit date into the binary.
//!
//! The short commit and date appear in `--version`; the full commit is
//! recorded in every batch manifest.

use std::env;
use std::process::Command;

struct BuildStamp {
    commit: String,
    commit_short: String,
    date: String,
}

impl BuildStamp {
    fn collect() -> Self {
        let commit = env::var("GITHUB_SHA")
            .ok()
            .filter(|sha| !sha.is_empty())
            .or_else(|| git(&["rev-parse", "HEAD"]));
        let commit_short = commit
            .as_deref()
            .map(|sha| sha.chars().take(7).collect::<String>());
        let date = git(&["log", "-1", "--format=%cI"]);
        Self {
            commit: commit.unwrap_or_else(unknown),
            commit_short: commit_short.unwrap_or_else(unknown),
            date: date.unwrap_or_else(unknown),
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    let stamp = BuildStamp::collect();
    for (key, value) in [
        ("BYTES2JSON_BUILD_COMMIT", &stamp.commit_short),
        ("BYTES2JSON_BUILD_COMMIT_FULL", &stamp.commit),
        ("BYTES2JSON_BUILD_DATE", &stamp.date),
    ] {
        println!("cargo:rustc-env={key}={value}");
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn unknown() -> String {
    "unknown".to_string()
}
