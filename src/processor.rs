//! Core template resolution and materialization.
//!
//! Fills the freshly created output tree in three passes: user overrides
//! first, built-in boilerplate second (never clobbering what an override
//! already produced), and the target script last.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Component, Path};
use walkdir::WalkDir;

use crate::config::ScaffoldContext;
use crate::error::{Error, Result};
use crate::render::PlaceholderRenderer;
use crate::templates::{builtin_templates, SCRIPT_STUB};

/// Version-control housekeeping directories that are never copied out of
/// the override tree.
pub const VCS_DIRS: [&str; 3] = [".git", ".svn", "CVS"];

/// Materializes template files into the output tree.
pub struct Processor<'a> {
    renderer: &'a PlaceholderRenderer,
    context: &'a ScaffoldContext,
}

impl<'a> Processor<'a> {
    pub fn new(renderer: &'a PlaceholderRenderer, context: &'a ScaffoldContext) -> Self {
        Self { renderer, context }
    }

    /// Override pass: copies every regular file under the override
    /// directory into the output tree, substituting placeholders along the
    /// way.
    ///
    /// A missing override directory skips the pass entirely. Intermediate
    /// subdirectories are created as needed; a failure there is fatal,
    /// matching the tree initializer. Nothing can pre-exist at the
    /// destinations, so each file is written unconditionally.
    pub fn copy_overrides(&self) -> Result<()> {
        let override_dir = &self.context.override_dir;
        if !override_dir.is_dir() {
            debug!("no override directory at {}", override_dir.display());
            return Ok(());
        }

        debug!("copying overrides from {}", override_dir.display());
        for entry in WalkDir::new(override_dir) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(override_dir)
                .map_err(|e| Error::TemplateError(e.to_string()))?;
            if in_vcs_dir(relative) {
                debug!("skipping housekeeping file {}", relative.display());
                continue;
            }

            let target = self.context.out_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            self.copy_substituted(entry.path(), &target)?;
        }
        Ok(())
    }

    /// Built-in pass: writes every built-in template whose destination the
    /// override pass has not already produced.
    ///
    /// An unwritable destination costs that one file, not the run.
    pub fn write_builtins(&self) {
        for (relative, template) in builtin_templates() {
            let target = self.context.out_dir.join(relative);
            if target.exists() {
                debug!("keeping existing {}", target.display());
                continue;
            }
            let (rendered, replaced) = self.renderer.render(template, self.context);
            debug!("writing {} ({} replacement(s))", target.display(), replaced);
            if let Err(err) = fs::write(&target, rendered) {
                warn!("could not write {}: {}", target.display(), err);
            }
        }
    }

    /// Script placement: copies the input script into the tree, or writes
    /// the stub skeleton when the input path does not exist yet.
    pub fn place_script(&self) -> Result<()> {
        let target = self.context.out_dir.join(&self.context.script_name);
        if self.context.script_path.exists() {
            self.copy_substituted(&self.context.script_path, &target)
        } else {
            debug!(
                "{} does not exist; writing a stub",
                self.context.script_path.display()
            );
            let (rendered, _) = self.renderer.render(SCRIPT_STUB, self.context);
            fs::write(target, rendered)?;
            Ok(())
        }
    }

    /// Reads a source file, substitutes placeholders, and writes the result
    /// to `target`. Substitution only applies to text: a source that is not
    /// valid UTF-8 is copied verbatim instead.
    fn copy_substituted(&self, source: &Path, target: &Path) -> Result<()> {
        match fs::read_to_string(source) {
            Ok(content) => {
                let (rendered, replaced) = self.renderer.render(&content, self.context);
                debug!("writing {} ({} replacement(s))", target.display(), replaced);
                fs::write(target, rendered)?;
            }
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                debug!("copying {} verbatim (not valid UTF-8)", source.display());
                fs::copy(source, target)?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }
}

/// True when any component of the relative path names a version-control
/// housekeeping directory.
pub fn in_vcs_dir(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(name) => {
            name.to_str().is_some_and(|name| VCS_DIRS.contains(&name))
        }
        _ => false,
    })
}
