// src/config.rs
use crate::args::Args;
use anyhow::Context;
pub use linecounter_engine::config::{
    Config, ConfigBuilder, ExcludedNames, FilterConfig, FilterConfigBuilder, WalkOptions,
    WalkOptionsBuilder,
};

impl TryFrom<&Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: &Args) -> anyhow::Result<Self> {
        let walk = walk_options_from_args(args)?;
        let filter = filter_config_from_args(args)?;

        ConfigBuilder::default()
            .walk(walk)
            .filter(filter)
            .build()
            .context("failed to build config")
    }
}

fn walk_options_from_args(args: &Args) -> anyhow::Result<WalkOptions> {
    WalkOptionsBuilder::default()
        .root(args.scan.dir.clone())
        .build()
        .context("failed to build walk options")
}

fn filter_config_from_args(args: &Args) -> anyhow::Result<FilterConfig> {
    let excluded: ExcludedNames = args.scan.exclude.iter().cloned().collect();

    let filter = FilterConfigBuilder::default()
        .extensions(args.scan.ext.clone())
        .excluded_names(excluded)
        .build()
        .context("failed to build filter config")?;

    // 不正な拡張子（空文字など）は走査前に弾く
    Ok(filter.normalized()?)
}
