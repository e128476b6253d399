//! actions-include - `#!include` partials for GitHub Actions workflows

pub mod builder;
pub mod config;
pub mod directive;
pub mod discover;
pub mod error;
pub mod expand;
pub mod hook;
pub mod normalize;
pub mod partial;

pub use builder::{build, BuildReport};
pub use config::{find_package_root, Config};
pub use directive::{find_directives, has_directives, Directive};
pub use error::{FixSuggestion, IncludeError, Result};
pub use expand::Expander;
pub use normalize::normalize;
pub use partial::{Partial, PartialResolver, PartialSource};
