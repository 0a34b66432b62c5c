// src/presentation.rs
use crate::options::OutputFormat;
use linecounter_engine::stats::Report;
use std::io::{self, Write};

/// Write the report in the requested format.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_report<W: Write>(report: &Report, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(report, out),
        OutputFormat::Json => write_json(report, out),
    }
}

fn write_text<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    for s in &report.files {
        writeln!(out, "{}: {} lines", s.path.display(), s.lines)?;
    }
    writeln!(out, "Total lines: {}", report.total)
}

fn write_json<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
