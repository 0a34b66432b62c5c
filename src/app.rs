use crate::args::Args;
use crate::config::Config;
use crate::presentation;
use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};

/// Count, then print. Nothing reaches stdout unless every matching file was read.
pub fn run(args: &Args) -> Result<()> {
    let config = Config::try_from(args)?;
    info!("linecounter v{} · root={}", crate::VERSION, config.walk.root.display());

    let report = linecounter_engine::run(&config).with_context(|| {
        format!("failed to count lines under {}", config.walk.root.display())
    })?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    presentation::write_report(&report, args.output.format, &mut out)
        .context("failed to emit output")?;
    out.flush().context("failed to emit output")?;
    Ok(())
}
