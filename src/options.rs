use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<path>: <count> lines` の一覧と合計行
    #[default]
    Text,
    /// 一覧と合計を JSON で出力
    Json,
}
