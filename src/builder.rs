//! Workflow directory builder
//!
//! One run: validate config, wipe and recreate `.github/workflows`, write the
//! warning README, then expand + normalize every `.yml` source into it.
//! The first error aborts the run; whatever was already written stays.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, info_span, warn};

use crate::config::Config;
use crate::directive::has_directives;
use crate::discover::discover_workflows;
use crate::error::{IncludeError, Result};
use crate::expand::Expander;
use crate::normalize::normalize;
use crate::partial::PartialResolver;

pub const README_FILE: &str = "README.md";

/// What a successful build wrote
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Output files in write order (a collided name appears once per write)
    pub written: Vec<PathBuf>,
    pub readme: Option<PathBuf>,
}

pub fn readme_contents(workflows_dir: &str) -> String {
    format!(
        "DO NOT USE THIS DIRECTORY!!!\n\
         Add/edit workflows in the {workflows_dir} folder instead.\n\
         They are copied over to here using a pre-commit hook.\n"
    )
}

pub fn build(config: &Config) -> Result<BuildReport> {
    config.validate()?;

    let output_dir = config.output_dir();
    info!(output = %output_dir.display(), "Running actions-include");

    reset_dir(&output_dir)?;

    let mut report = BuildReport::default();

    if config.include_warning_readme() {
        let readme = output_dir.join(README_FILE);
        write_file(&readme, &readme_contents(&config.workflows_dir_display()))?;
        report.readme = Some(readme);
    }

    let resolver = PartialResolver::new(config.partials_dir());
    let expander = Expander::new(&resolver).with_max_depth(config.max_include_depth());
    let mut sources: HashMap<PathBuf, PathBuf> = HashMap::new();

    for source in discover_workflows(config.workflows_dir()) {
        let source = source?;
        let shown = source
            .strip_prefix(config.workflows_dir())
            .unwrap_or(&source)
            .display()
            .to_string();
        let _span = info_span!("workflow", file = %shown).entered();
        info!("Processing: {}", shown);

        let Some(file_name) = source.file_name() else {
            continue;
        };
        let target = output_dir.join(file_name);

        let rendered = render_workflow(&expander, &source)?;
        if let Some(previous) = sources.insert(target.clone(), source.clone()) {
            warn!(
                previous = %previous.display(),
                "{} overwrites an earlier workflow with the same file name",
                shown
            );
        }
        write_file(&target, &rendered)?;
        report.written.push(target);
    }

    info!(count = report.written.len(), "Done");
    Ok(report)
}

/// Expand (when needed) and normalize one workflow source
fn render_workflow(expander: &Expander<'_, PartialResolver>, source: &Path) -> Result<String> {
    let mut contents = fs::read_to_string(source).map_err(|e| IncludeError::io(source, e))?;

    if has_directives(&contents) {
        contents = expander.expand(&contents)?;
    }

    normalize(&contents).map_err(|e| IncludeError::YamlParse {
        path: source.to_path_buf(),
        source: e,
    })
}

fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| IncludeError::io(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| IncludeError::io(dir, e))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| IncludeError::io(path, e))
}
