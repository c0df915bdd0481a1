//! pl2dist converts a single script into a minimal packaged distribution
//! directory: packaging boilerplate, test stubs, a file manifest, and a
//! freshly initialized repository, with user overrides taking priority
//! over the built-in templates.

/// Command-line interface module for the pl2dist application
pub mod cli;

/// Per-run configuration resolved from the environment and the script path
pub mod config;

/// Best-effort discovery of module dependencies and minimum Perl version
pub mod deps;

/// Error types and handling for the pl2dist application
pub mod error;

/// MANIFEST generation for the finished tree
pub mod manifest;

/// Core template resolution and materialization
/// Fills the output tree from the override directory, the built-in
/// template set, and the target script itself
pub mod processor;

/// Placeholder substitution for template content
pub mod render;

/// The built-in boilerplate template set
pub mod templates;

/// Output tree creation and its existence precondition
pub mod tree;

/// Version-control finalization of the generated tree
pub mod vcs;
