//! actions-include CLI - pre-commit expansion of workflow partials

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;

use actions_include::config::{DEFAULT_PARTIALS_DIR, DEFAULT_WORKFLOWS_DIR};
use actions_include::expand::DEFAULT_MAX_INCLUDE_DEPTH;
use actions_include::{
    build, find_package_root, hook, BuildReport, Config, FixSuggestion, IncludeError,
};

#[derive(Parser)]
#[command(name = "actions-include")]
#[command(about = "Expand #!include partials into .github/workflows")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild .github/workflows unconditionally
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Pre-commit entry point: rebuild only when staged workflow sources changed
    Hook {
        #[command(flatten)]
        args: BuildArgs,

        /// Run even if no staged file is under the workflows dir (same as setting DEBUG)
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Path to partials
    #[arg(long, default_value = DEFAULT_PARTIALS_DIR)]
    partials_dir: PathBuf,

    /// Path to workflows (must not be .github/workflows)
    #[arg(long, default_value = DEFAULT_WORKFLOWS_DIR)]
    workflows_dir: PathBuf,

    /// Include warning README.md in .github/workflows
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    include_warning_readme: bool,

    /// Package root (defaults to the nearest directory with package.json, Cargo.toml or .git)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Maximum partial nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_INCLUDE_DEPTH)]
    max_depth: usize,
}

impl BuildArgs {
    fn into_config(self) -> Result<Config, IncludeError> {
        let root = match self.root {
            Some(root) => root,
            None => {
                let cwd = std::env::current_dir().map_err(|e| IncludeError::io(".", e))?;
                find_package_root(&cwd)?
            }
        };
        let root = root.canonicalize().map_err(|e| IncludeError::io(&root, e))?;

        Ok(Config::new(root)
            .with_partials_dir(self.partials_dir)
            .with_workflows_dir(self.workflows_dir)
            .with_warning_readme(self.include_warning_readme)
            .with_max_include_depth(self.max_depth))
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build { args } => run_build(args),
        Commands::Hook { args, force } => run_hook(args, force),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn run_build(args: BuildArgs) -> Result<(), IncludeError> {
    let config = args.into_config()?;
    let report = build(&config)?;
    print_report(&config, &report);
    Ok(())
}

fn run_hook(args: BuildArgs, force: bool) -> Result<(), IncludeError> {
    let config = args.into_config()?;

    let should_run = if force || hook::force_requested() {
        true
    } else {
        let staged = hook::staged_files(config.package_root())?;
        hook::should_run(&staged, &config.workflows_dir_display())
    };

    if !should_run {
        println!("{} Skipping actions-include", "→".cyan());
        return Ok(());
    }

    let report = build(&config)?;
    print_report(&config, &report);
    Ok(())
}

fn print_report(config: &Config, report: &BuildReport) {
    println!(
        "{} Wrote {} workflow(s) to {}",
        "✓".green(),
        report.written.len(),
        config.output_dir().display()
    );
}
