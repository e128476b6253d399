//! Build configuration
//!
//! All paths are resolved against an explicit package root, so a build can
//! be pointed at any directory (tests use temporary ones).
//!
//! ## Layout
//!
//! - partials: `<root>/github/partials` by default
//! - workflow sources: `<root>/github/workflows` by default
//! - output: always `<root>/.github/workflows`

use std::path::{Component, Path, PathBuf};

use crate::error::{IncludeError, Result};
use crate::expand::DEFAULT_MAX_INCLUDE_DEPTH;

pub const DEFAULT_PARTIALS_DIR: &str = "github/partials";
pub const DEFAULT_WORKFLOWS_DIR: &str = "github/workflows";

/// Output location relative to the package root
pub const OUTPUT_DIR: &str = ".github/workflows";

/// Files or directories marking a package root
pub const ROOT_MARKERS: &[&str] = &["package.json", "Cargo.toml", ".git"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    package_root: PathBuf,
    partials_dir: PathBuf,
    workflows_dir: PathBuf,
    include_warning_readme: bool,
    max_include_depth: usize,
}

impl Config {
    /// Config with default directories under `package_root`
    pub fn new(package_root: impl AsRef<Path>) -> Self {
        let package_root = normalize_path(package_root.as_ref());
        Self {
            partials_dir: package_root.join(DEFAULT_PARTIALS_DIR),
            workflows_dir: package_root.join(DEFAULT_WORKFLOWS_DIR),
            package_root,
            include_warning_readme: true,
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
        }
    }

    /// Relative paths are taken from the package root
    pub fn with_partials_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.partials_dir = self.resolve(dir.as_ref());
        self
    }

    /// Relative paths are taken from the package root
    pub fn with_workflows_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.workflows_dir = self.resolve(dir.as_ref());
        self
    }

    pub fn with_warning_readme(mut self, enabled: bool) -> Self {
        self.include_warning_readme = enabled;
        self
    }

    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    pub fn partials_dir(&self) -> &Path {
        &self.partials_dir
    }

    pub fn workflows_dir(&self) -> &Path {
        &self.workflows_dir
    }

    pub fn include_warning_readme(&self) -> bool {
        self.include_warning_readme
    }

    pub fn max_include_depth(&self) -> usize {
        self.max_include_depth
    }

    pub fn output_dir(&self) -> PathBuf {
        self.package_root.join(OUTPUT_DIR)
    }

    /// Workflows directory as shown to users and matched against staged paths:
    /// relative to the package root with `/` separators when it lies inside it.
    pub fn workflows_dir_display(&self) -> String {
        match self.workflows_dir.strip_prefix(&self.package_root) {
            Ok(rel) => rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => self.workflows_dir.display().to_string(),
        }
    }

    /// Must pass before the build touches the filesystem
    pub fn validate(&self) -> Result<()> {
        if self.workflows_dir == self.output_dir() {
            return Err(IncludeError::ConfigInvalid {
                reason: format!("workflows dir must not be {OUTPUT_DIR}"),
            });
        }
        if self.max_include_depth == 0 {
            return Err(IncludeError::ConfigInvalid {
                reason: "max include depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn resolve(&self, dir: &Path) -> PathBuf {
        normalize_path(&self.package_root.join(dir))
    }
}

/// Nearest ancestor of `start` (inclusive) holding one of [`ROOT_MARKERS`]
pub fn find_package_root(start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()))
        .map(Path::to_path_buf)
        .ok_or_else(|| IncludeError::PackageRootNotFound {
            start: start.to_path_buf(),
        })
}

/// Lexically clean a path: drop `.` segments and fold `..` into its parent.
/// Does not touch the filesystem, so it works for directories that do not
/// exist yet.
fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
