use crate::config::{FilterConfig, WalkOptions};
use crate::error::{EngineError, Result};
use ignore::{DirEntry, WalkBuilder};
use log::{debug, trace};
use std::path::PathBuf;

/// Sequential recursive directory walk.
///
/// Every file below `options.root` is visited, hidden files included, and no
/// ignore files are consulted. Siblings are visited in file-name order. The
/// returned paths are the files that pass the extension filter and are not
/// named in the exclusion list.
///
/// # Errors
/// Returns [`EngineError::Walk`] if the root does not exist or a directory
/// cannot be listed, and [`EngineError::Config`] if the root is not a directory.
pub fn walk(options: &WalkOptions, filters: &FilterConfig) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(&options.root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut matched = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        trace!("visit {}", entry.path().display());

        if entry.depth() == 0 {
            if !entry.path().is_dir() {
                return Err(EngineError::Config(format!(
                    "'{}' is not a directory",
                    options.root.display()
                )));
            }
            continue;
        }

        if !is_regular_file(&entry) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !filters.matches_extension(&name) {
            continue;
        }
        if filters.is_excluded(&name) {
            debug!("excluded {}", entry.path().display());
            continue;
        }

        matched.push(entry.into_path());
    }

    Ok(matched)
}

/// Any symlink that does not resolve to a directory is a candidate, dangling ones
/// included, so a broken link surfaces as an unreadable file when it is counted.
/// Symlinked directories are never entered.
fn is_regular_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}
