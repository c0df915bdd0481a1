//! MANIFEST generation for the finished tree.
//! Walks the materialized output tree and writes the sorted file listing
//! that downstream packaging tooling consumes, honoring the exclusion
//! patterns in the tree's own `MANIFEST.SKIP`.

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// File name of the generated listing.
pub const MANIFEST_FILE: &str = "MANIFEST";

/// File name of the exclusion-pattern list.
pub const SKIP_FILE: &str = "MANIFEST.SKIP";

/// Reads the tree's `MANIFEST.SKIP` into a set of glob patterns.
///
/// # Notes
/// - A missing skip file yields an empty set (nothing excluded)
/// - Blank lines and `#` comments are ignored
/// - An invalid pattern is an error; the skip file is generated content,
///   so a bad line means the tree is already damaged
pub fn read_skip_patterns<P: AsRef<Path>>(tree: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    if let Ok(contents) = fs::read_to_string(tree.as_ref().join(SKIP_FILE)) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::ManifestError(format!("bad skip pattern '{}': {}", line, e))
            })?);
        }
    } else {
        debug!("{} not present; nothing excluded from the manifest", SKIP_FILE);
    }
    builder.build().map_err(|e| Error::ManifestError(e.to_string()))
}

/// Writes `MANIFEST`: every file in the tree as a sorted, `/`-separated
/// relative path, minus whatever the skip patterns exclude. The manifest
/// lists itself.
pub fn write_manifest<P: AsRef<Path>>(tree: P) -> Result<()> {
    let tree = tree.as_ref();
    let skip = read_skip_patterns(tree)?;

    let mut files = vec![MANIFEST_FILE.to_string()];
    for entry in WalkDir::new(tree) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(tree)
            .map_err(|e| Error::ManifestError(e.to_string()))?;
        let listing = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if skip.is_match(&listing) {
            debug!("excluding {} from the manifest", listing);
            continue;
        }
        files.push(listing);
    }

    files.sort();
    files.dedup();

    debug!("writing {} with {} entries", MANIFEST_FILE, files.len());
    fs::write(tree.join(MANIFEST_FILE), files.join("\n") + "\n")?;
    Ok(())
}
