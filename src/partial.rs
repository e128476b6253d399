//! Partial lookup
//!
//! A partial is addressed by name. Names ending in a single-letter extension
//! (`foo.y`, `bar.J`) are used verbatim, everything else gets `.yml` appended.

use crate::error::{IncludeError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

static SINGLE_LETTER_EXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.[a-z]$").unwrap());

/// Extension appended to names without a single-letter extension
pub const DEFAULT_PARTIAL_EXTENSION: &str = "yml";

/// A partial read from its source, not yet expanded
#[derive(Debug, Clone)]
pub struct Partial {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

/// Anything that can hand out raw partial text by name
pub trait PartialSource {
    fn load(&self, name: &str) -> Result<Partial>;
}

/// Partials stored as files under one directory
#[derive(Debug, Clone)]
pub struct PartialResolver {
    partials_dir: PathBuf,
}

impl PartialResolver {
    pub fn new(partials_dir: impl AsRef<Path>) -> Self {
        Self {
            partials_dir: partials_dir.as_ref().to_path_buf(),
        }
    }

    /// Compute the on-disk path for a partial name
    pub fn partial_path(&self, name: &str) -> PathBuf {
        let path = self.partials_dir.join(name);
        if SINGLE_LETTER_EXT.is_match(name) {
            return path;
        }
        let mut raw: OsString = path.into_os_string();
        raw.push(".");
        raw.push(DEFAULT_PARTIAL_EXTENSION);
        PathBuf::from(raw)
    }
}

impl PartialSource for PartialResolver {
    fn load(&self, name: &str) -> Result<Partial> {
        let path = self.partial_path(name);
        if !path.is_file() {
            return Err(IncludeError::PartialNotFound {
                name: name.to_string(),
                path,
            });
        }
        let content = fs::read_to_string(&path).map_err(|e| IncludeError::io(&path, e))?;
        Ok(Partial {
            name: name.to_string(),
            path,
            content,
        })
    }
}
