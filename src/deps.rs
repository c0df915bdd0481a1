//! Best-effort discovery of a script's module dependencies and minimum
//! Perl version.
//!
//! Discovery shells out to the perl interpreter's own introspection
//! modules. Every failure path (no interpreter, missing modules, a script
//! the extractor cannot parse) degrades to an empty result so that
//! scaffolding never stalls on a missing toolchain.

use log::{debug, info};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A module the target script requires, with its declared minimum version
/// when one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub module: String,
    pub version: Option<String>,
}

/// Capability interface for dependency introspection.
///
/// Selected once at startup by [`detect_discoverer`]; the rest of the run
/// does not care which implementation it got.
pub trait DependencyDiscoverer {
    /// Modules the script requires, in discovery order.
    fn modules(&self, script: &Path) -> Vec<Dependency>;

    /// Minimum Perl major version the script declares, if any.
    fn minimum_perl(&self, script: &Path) -> Option<u32>;
}

/// Discoverer backed by a perl interpreter on this host.
pub struct PerlDiscoverer {
    perl: PathBuf,
}

/// Discoverer used when no perl interpreter is available. Always returns
/// the defaults.
pub struct NullDiscoverer;

impl DependencyDiscoverer for NullDiscoverer {
    fn modules(&self, _script: &Path) -> Vec<Dependency> {
        Vec::new()
    }

    fn minimum_perl(&self, _script: &Path) -> Option<u32> {
        None
    }
}

/// One-liner handed to `perl -MModule::Extract::Use`. Prints one
/// tab-separated `module<TAB>version` line per requirement.
const EXTRACT_USE: &str = "my $extractor = Module::Extract::Use->new; \
    my $details = $extractor->get_modules_with_details(shift) || []; \
    printf qq(%s\\t%s\\n), $_->module, $_->version // q() for @$details;";

/// One-liner handed to `perl -MModule::Extract::DeclaredMinimumPerl`.
/// Prints the declared minimum version, or nothing.
const EXTRACT_MINIMUM: &str =
    "my $extractor = Module::Extract::DeclaredMinimumPerl->new; \
    print $extractor->minimum_declared_perl(shift) // q();";

impl PerlDiscoverer {
    pub fn new(perl: PathBuf) -> Self {
        Self { perl }
    }

    fn introspect(&self, module: &str, program: &str, script: &Path) -> Option<String> {
        let output = Command::new(&self.perl)
            .arg(format!("-M{}", module))
            .arg("-e")
            .arg(program)
            .arg(script)
            .output();

        match output {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => {
                info!("{} is not usable ({}); using defaults", module, output.status);
                None
            }
            Err(err) => {
                info!("could not run {}: {}; using defaults", self.perl.display(), err);
                None
            }
        }
    }
}

impl DependencyDiscoverer for PerlDiscoverer {
    fn modules(&self, script: &Path) -> Vec<Dependency> {
        let Some(stdout) = self.introspect("Module::Extract::Use", EXTRACT_USE, script)
        else {
            return Vec::new();
        };

        stdout
            .lines()
            .filter_map(|line| {
                let (module, version) = line.split_once('\t')?;
                if module.is_empty() {
                    return None;
                }
                Some(Dependency {
                    module: module.to_string(),
                    version: if version.is_empty() {
                        None
                    } else {
                        Some(version.to_string())
                    },
                })
            })
            .collect()
    }

    fn minimum_perl(&self, script: &Path) -> Option<u32> {
        let stdout =
            self.introspect("Module::Extract::DeclaredMinimumPerl", EXTRACT_MINIMUM, script)?;
        parse_major_version(stdout.trim())
    }
}

/// Parses the major component out of version spellings like `5.008`,
/// `v5.10.1`, or `5`.
pub fn parse_major_version(version: &str) -> Option<u32> {
    let digits: String = version
        .trim_start_matches('v')
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Picks the discoverer for this host: the perl-backed one when a perl
/// executable is on `PATH`, the null one otherwise.
pub fn detect_discoverer() -> Box<dyn DependencyDiscoverer> {
    match find_in_path("perl") {
        Some(perl) => {
            debug!("using perl at {}", perl.display());
            Box::new(PerlDiscoverer::new(perl))
        }
        None => {
            info!("no perl interpreter found; dependency discovery disabled");
            Box::new(NullDiscoverer)
        }
    }
}

/// Searches `PATH` for an executable with the given name.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    for dir in env::split_paths(&path) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if cfg!(windows) {
            let candidate = dir.join(format!("{}.exe", name));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
