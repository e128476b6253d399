//! Error types with fix suggestions

use std::path::PathBuf;
use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

pub type Result<T> = std::result::Result<T, IncludeError>;

#[derive(Error, Debug)]
pub enum IncludeError {
    // ─────────────────────────────────────────────────────────────
    // Configuration errors (INC-001 to INC-002)
    // ─────────────────────────────────────────────────────────────
    #[error("INC-001: Invalid configuration: {reason}")]
    ConfigInvalid { reason: String },

    #[error("INC-002: No package root found above '{}'", .start.display())]
    PackageRootNotFound { start: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Expansion errors (INC-010 to INC-011)
    // ─────────────────────────────────────────────────────────────
    #[error("INC-010: Partial '{name}' does not exist (looked for {})", .path.display())]
    PartialNotFound { name: String, path: PathBuf },

    #[error("INC-011: Include depth limit {depth} exceeded at partial '{name}' (chain: {})", .chain.join(" -> "))]
    RecursionLimitExceeded {
        name: String,
        depth: usize,
        chain: Vec<String>,
    },

    // ─────────────────────────────────────────────────────────────
    // Output errors (INC-020)
    // ─────────────────────────────────────────────────────────────
    #[error("INC-020: YAML parse error in {}: {source}", .path.display())]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // Filesystem errors (INC-030 to INC-031)
    // ─────────────────────────────────────────────────────────────
    #[error("INC-030: IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("INC-031: Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    // ─────────────────────────────────────────────────────────────
    // Hook errors (INC-040)
    // ─────────────────────────────────────────────────────────────
    #[error("INC-040: Could not list staged files: {reason}")]
    Git { reason: String },
}

impl IncludeError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IncludeError::Io {
            path: path.into(),
            source,
        }
    }
}

impl FixSuggestion for IncludeError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            IncludeError::ConfigInvalid { .. } => {
                Some("Point --workflows-dir at a source folder other than .github/workflows")
            }
            IncludeError::PackageRootNotFound { .. } => {
                Some("Run inside a repository or pass --root explicitly")
            }
            IncludeError::PartialNotFound { .. } => {
                Some("Create the partial file or fix the name in the #!include(...) directive")
            }
            IncludeError::RecursionLimitExceeded { .. } => {
                Some("Remove the include cycle, or raise --max-depth for deeply nested partials")
            }
            IncludeError::YamlParse { .. } => {
                Some("Check YAML syntax after expansion: indentation of the #!include line and the partial")
            }
            IncludeError::Io { .. } => Some("Check file path and permissions"),
            IncludeError::Walk(_) => Some("Check that the workflows directory exists and is readable"),
            IncludeError::Git { .. } => {
                Some("Make sure git is installed and the package root is inside a repository")
            }
        }
    }
}
