//! Per-run configuration for pl2dist.
//! Resolves the scaffold context from the script path and the process
//! environment before any filesystem work starts.

use crate::deps::{Dependency, DependencyDiscoverer};
use crate::error::{Error, Result};
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// Suffix appended to the script basename to name the output tree.
pub const DIR_SUFFIX: &str = ".d";

/// Name of the test subdirectory inside the output tree.
pub const TEST_DIR: &str = "t";

/// Override-template directory name under `$HOME`.
pub const OVERRIDE_DIR: &str = ".pl2dist";

/// Version written into generated boilerplate. This is the version the new
/// distribution starts at, not pl2dist's own version.
pub const DIST_VERSION: &str = "0.10";

/// Minimum Perl major version assumed when discovery finds nothing.
pub const DEFAULT_MINIMUM_PERL: u32 = 5;

/// Environment variable that turns on progress logging.
pub const DEBUG_ENV: &str = "PL2DIST_DEBUG";

/// Environment variable that suppresses version-control initialization.
pub const SKIP_GIT_ENV: &str = "PL2DIST_SKIP_GIT";

/// Environment variable holding the CPAN account id used in `.releaserc`.
pub const CPAN_USER_ENV: &str = "PL2DIST_CPAN_USER";

/// Resolved configuration for one invocation.
///
/// Built once at startup and read-only afterwards; every later stage (tree
/// creation, materialization, finalization) borrows it.
#[derive(Debug, Clone)]
pub struct ScaffoldContext {
    /// The script path exactly as given on the command line
    pub script_path: PathBuf,
    /// Final path component of `script_path`
    pub script_name: String,
    /// Output tree: `<script_name>.d`
    pub out_dir: PathBuf,
    /// Home directory; empty when `HOME` is unset
    pub home: PathBuf,
    /// `<home>/.pl2dist`, whose contents win over built-in templates
    pub override_dir: PathBuf,
    /// Directory-separator token for the host platform
    pub dir_sep: &'static str,
    /// Version the generated boilerplate starts the distribution at
    pub dist_version: &'static str,
    /// Minimum Perl major version for the build description
    pub minimum_perl: u32,
    /// Modules the script requires, in discovery order
    pub dependencies: Vec<Dependency>,
    /// Whether progress messages go to stderr
    pub verbose: bool,
    /// Whether version-control initialization is suppressed
    pub skip_git: bool,
    /// CPAN account id for the release metadata stub; may be empty
    pub cpan_user: String,
}

impl ScaffoldContext {
    /// Resolves the context for one run.
    ///
    /// # Arguments
    /// * `script_path` - Path to the script to scaffold
    /// * `discoverer` - Dependency discoverer selected for this host
    ///
    /// # Errors
    /// * `Error::ScriptName` if the path has no usable final component
    ///
    /// A missing `HOME` is not an error: a warning goes to stderr and the
    /// override directory resolves relative to the current directory.
    pub fn resolve(
        script_path: &Path,
        discoverer: &dyn DependencyDiscoverer,
    ) -> Result<Self> {
        let script_name = script_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| Error::ScriptName {
                path: script_path.display().to_string(),
            })?;

        let home = match env::var_os("HOME") {
            Some(home) => PathBuf::from(home),
            None => {
                eprintln!(
                    "HOME is not set; looking for {} in the current directory.",
                    OVERRIDE_DIR
                );
                PathBuf::new()
            }
        };
        let override_dir = home.join(OVERRIDE_DIR);
        let out_dir = PathBuf::from(format!("{}{}", script_name, DIR_SUFFIX));

        let dependencies = discoverer.modules(script_path);
        let minimum_perl =
            discoverer.minimum_perl(script_path).unwrap_or(DEFAULT_MINIMUM_PERL);
        debug!(
            "{} requires {} module(s), perl >= {}",
            script_name,
            dependencies.len(),
            minimum_perl
        );

        Ok(Self {
            script_path: script_path.to_path_buf(),
            script_name,
            out_dir,
            home,
            override_dir,
            dir_sep: dir_separator(env::consts::OS),
            dist_version: DIST_VERSION,
            minimum_perl,
            dependencies,
            verbose: env_flag(DEBUG_ENV),
            skip_git: env_flag(SKIP_GIT_ENV),
            cpan_user: env::var(CPAN_USER_ENV).unwrap_or_default(),
        })
    }

    /// Looks up the value a placeholder key resolves to.
    ///
    /// Keys arrive already lower-cased from the renderer. Unknown keys
    /// return `None`; the renderer substitutes those to the empty string.
    pub fn placeholder_value(&self, key: &str) -> Option<String> {
        match key {
            "script" => Some(self.script_name.clone()),
            "script_path" => Some(self.script_path.display().to_string()),
            "out_dir" => Some(self.out_dir.display().to_string()),
            "home" => Some(self.home.display().to_string()),
            "dir_sep" => Some(self.dir_sep.to_string()),
            "version" => Some(self.dist_version.to_string()),
            "minimum_perl" => Some(self.minimum_perl.to_string()),
            "prereq_pm" => Some(self.prereq_lines()),
            "cpan_user" => Some(self.cpan_user.clone()),
            _ => None,
        }
    }

    /// Renders the discovered dependencies as `PREREQ_PM` hash entries for
    /// the generated build description. Modules without a discovered
    /// version are pinned at '0'.
    pub fn prereq_lines(&self) -> String {
        self.dependencies
            .iter()
            .map(|dep| {
                format!(
                    "        '{}' => '{}',",
                    dep.module,
                    dep.version.as_deref().unwrap_or("0")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Directory-separator token for the given host OS identifier.
pub fn dir_separator(os: &str) -> &'static str {
    match os {
        "windows" => "\\",
        _ => "/",
    }
}

/// True when the named environment variable holds a truthy value.
/// Unset, empty, and "0" all read as false.
pub fn env_flag(name: &str) -> bool {
    matches!(env::var(name), Ok(value) if !value.is_empty() && value != "0")
}
