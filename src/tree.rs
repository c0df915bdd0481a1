//! Output tree creation.
//! Enforces the one hard precondition of the whole run: a previous scaffold
//! is never overwritten.

use crate::config::{ScaffoldContext, TEST_DIR};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Creates `<script>.d/` and its `t/` subdirectory.
///
/// # Errors
/// * `Error::OutputDirectoryExists` if the output directory is already
///   there; the run aborts so an earlier scaffold is left untouched
/// * `Error::IoError` if either directory cannot be created
pub fn create_output_tree(context: &ScaffoldContext) -> Result<()> {
    if context.out_dir.exists() {
        return Err(Error::OutputDirectoryExists {
            out_dir: context.out_dir.display().to_string(),
        });
    }

    make_dir(&context.out_dir)?;
    make_dir(&context.out_dir.join(TEST_DIR))?;
    Ok(())
}

fn make_dir(path: &Path) -> Result<()> {
    debug!("creating directory {}", path.display());
    fs::create_dir(path)?;
    set_tree_mode(path)
}

// Owner rwx, group/other rx.
#[cfg(unix)]
fn set_tree_mode(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_tree_mode(_path: &Path) -> Result<()> {
    Ok(())
}
