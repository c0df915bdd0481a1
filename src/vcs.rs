//! Version-control finalization of the generated tree.
//! Initializes a git repository in the output tree, stages every file, and
//! records the initial commit. All of it is best-effort: the scaffold is
//! complete with or without version control.

use log::{debug, info, warn};
use std::path::Path;
use std::process::Command;

use crate::config::ScaffoldContext;
use crate::deps::find_in_path;

/// Initializes a repository in the output tree.
///
/// Skipped entirely when the run asked for it (`PL2DIST_SKIP_GIT`) or when
/// no git executable is on `PATH`. A failing git command logs a warning and
/// abandons the remaining steps; nothing here is fatal.
pub fn initialize_repository(context: &ScaffoldContext) {
    if context.skip_git {
        info!("skipping version-control initialization");
        return;
    }
    let Some(git) = find_in_path("git") else {
        info!("no git executable found; skipping version-control initialization");
        return;
    };

    let message = format!(
        "Initial commit from {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    let steps: [&[&str]; 3] =
        [&["init"], &["add", "."], &["commit", "-m", message.as_str()]];

    for args in steps {
        if !run_git(&git, &context.out_dir, args) {
            return;
        }
    }
}

/// Runs one git command with the output tree as its working directory,
/// blocking until it exits.
fn run_git(git: &Path, tree: &Path, args: &[&str]) -> bool {
    debug!("running git {}", args.join(" "));
    match Command::new(git).args(args).current_dir(tree).output() {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            warn!(
                "git {} failed ({}): {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            false
        }
        Err(err) => {
            warn!("could not run git {}: {}", args.join(" "), err);
            false
        }
    }
}
