// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::options::OutputFormat;
use linecounter_engine::config::{DEFAULT_EXTENSION, DEFAULT_ROOT};

#[derive(Parser, Debug)]
#[command(
    name = "linecounter",
    version,
    about = "ディレクトリ配下のファイル行数を集計し、行数の多い順に表示するツール"
)]
pub struct Args {
    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Scan-related options
#[derive(clap::Args, Debug)]
pub struct ScanOptions {
    /// 走査するルートディレクトリ
    #[arg(
        long,
        default_value = DEFAULT_ROOT,
        value_hint = clap::ValueHint::DirPath,
        help_heading = "走査"
    )]
    pub dir: PathBuf,

    /// 対象とする拡張子（カンマ区切り/複数指定可, 例: --ext rs,toml）
    #[arg(
        long,
        value_delimiter = ',',
        default_value = DEFAULT_EXTENSION,
        help_heading = "走査"
    )]
    pub ext: Vec<String>,

    /// 除外するファイル名（パスではなくファイル名のみ, カンマ区切り/複数指定可）
    #[arg(long, num_args = 1.., value_delimiter = ',', help_heading = "走査")]
    pub exclude: Vec<String>,
}

/// Output-related options
#[derive(clap::Args, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// ログを詳細化（-v: info, -vv: debug, -vvv: trace。RUST_LOG が優先）
    #[arg(short, long, action = ArgAction::Count, help_heading = "出力")]
    pub verbose: u8,
}
