// crates/engine/src/lib.rs
use log::{debug, info};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::stats::{FileStats, Report};

/// Walk the configured root, count every matching file and build the sorted report.
///
/// Files are read one after another in traversal order. The first file that
/// cannot be read aborts the whole run, so a returned report is always complete.
///
/// # Errors
///
/// Returns [`error::EngineError::UnreadableFile`] for the first matching file that
/// cannot be read, [`error::EngineError::Walk`] if traversal fails, and
/// [`error::EngineError::Config`] for an invalid filter or root.
pub fn run(config: &Config) -> Result<Report> {
    let filter = config.filter.clone().normalized()?;
    let paths = filesystem::walk(&config.walk, &filter)?;

    let mut stats = Vec::with_capacity(paths.len());
    for path in paths {
        let lines = processor::count_lines(&path)?;
        debug!("{}: {lines} lines", path.display());
        stats.push(FileStats::new(path).with_lines(lines));
    }

    let report = Report::from_stats(stats);
    info!(
        "counted {} files under {} ({} lines)",
        report.files.len(),
        config.walk.root.display(),
        report.total
    );
    Ok(report)
}
