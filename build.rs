use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// Exposes the short commit hash as ARTBOARD_RULER_GIT_HASH for `--version`.
fn main() {
    let hash = short_head_hash().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=ARTBOARD_RULER_GIT_HASH={hash}");

    if let Some(git_dir) = git_dir() {
        for watched in ["HEAD", "refs", "packed-refs"] {
            rerun_if_exists(&git_dir.join(watched));
        }
    }
}

fn short_head_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

fn git_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os("GIT_DIR") {
        return Some(PathBuf::from(dir));
    }

    let dot_git = PathBuf::from(".git");
    if dot_git.is_dir() {
        return Some(dot_git);
    }

    // Worktrees and submodules use a `.git` file pointing at the real directory.
    let contents = fs::read_to_string(&dot_git).ok()?;
    let target = PathBuf::from(contents.strip_prefix("gitdir:")?.trim());
    if target.is_relative() {
        Some(Path::new(".").join(target))
    } else {
        Some(target)
    }
}

fn rerun_if_exists(path: &Path) {
    if let Some(display) = path.to_str().filter(|_| path.exists()) {
        println!("cargo:rerun-if-changed={display}");
    }
}
