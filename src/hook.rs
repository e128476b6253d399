//! Pre-commit gating
//!
//! The hook only rebuilds when a staged file lives under the workflows
//! directory. Setting `DEBUG` in the environment forces a run.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use crate::error::{IncludeError, Result};

/// Environment variable that forces the hook to run
pub const FORCE_ENV: &str = "DEBUG";

/// Staged paths relative to `root`, as reported by git
pub fn staged_files(root: &Path) -> Result<Vec<String>> {
    let output = Command::new("git")
        .args(["diff", "--cached", "--name-only", "--relative"])
        .current_dir(root)
        .output()
        .map_err(|e| IncludeError::Git {
            reason: format!("failed to run git: {e}"),
        })?;

    if !output.status.success() {
        return Err(IncludeError::Git {
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// True when any staged path starts with `workflows_prefix`
pub fn should_run<S: AsRef<str>>(staged: &[S], workflows_prefix: &str) -> bool {
    staged
        .iter()
        .any(|path| path.as_ref().starts_with(workflows_prefix))
}

/// True when `DEBUG` is set to a non-empty value
pub fn force_requested() -> bool {
    is_force_value(std::env::var_os(FORCE_ENV).as_deref())
}

fn is_force_value(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
