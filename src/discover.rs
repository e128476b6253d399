//! Workflow source discovery

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Only files with this suffix are treated as workflow sources
pub const WORKFLOW_SUFFIX: &str = ".yml";

/// Lazily walk `workflows_dir` and yield every regular `.yml` file.
///
/// The walk is depth-first with entries sorted by file name, so the order is
/// stable between runs. Calling this again restarts the walk.
pub fn discover_workflows(workflows_dir: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(workflows_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if is_workflow_file(&entry) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(e.into())),
        })
}

fn is_workflow_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(WORKFLOW_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IncludeError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_finds_yml_recursively_in_order() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("sub1")).unwrap();
        fs::create_dir_all(root.join("sub2/deep")).unwrap();
        fs::write(root.join("b.yml"), "b: 1").unwrap();
        fs::write(root.join("a.yml"), "a: 1").unwrap();
        fs::write(root.join("sub1/x.yml"), "x: 1").unwrap();
        fs::write(root.join("sub2/deep/x.yml"), "x: 2").unwrap();

        let found: Vec<PathBuf> = discover_workflows(root)
            .map(|p| p.unwrap().strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            found,
            vec![
                PathBuf::from("a.yml"),
                PathBuf::from("b.yml"),
                PathBuf::from("sub1/x.yml"),
                PathBuf::from("sub2/deep/x.yml"),
            ]
        );
    }

    #[test]
    fn test_skips_other_extensions() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("ci.yaml"), "a: 1").unwrap();
        fs::write(temp.path().join("notes.md"), "# notes").unwrap();
        fs::write(temp.path().join("ci.yml"), "a: 1").unwrap();

        let found: Vec<_> = discover_workflows(temp.path()).collect::<Result<_>>().unwrap();
        assert_eq!(found, vec![temp.path().join("ci.yml")]);
    }

    #[test]
    fn test_directory_named_yml_is_skipped() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("folder.yml")).unwrap();

        assert_eq!(discover_workflows(temp.path()).count(), 0);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp = tempdir().unwrap();
        let mut walk = discover_workflows(&temp.path().join("missing"));

        assert!(matches!(walk.next(), Some(Err(IncludeError::Walk(_)))));
    }
}
