use clap::{Parser, Subcommand};
use spectra_common::DataSource;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spectra")]
#[command(about = "NASA EPIC地球画像ダッシュボード", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// デバッグログを逐次表示
    #[arg(long, global = true)]
    pub log: bool,

    /// 設定ファイル（JSON）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// デモデータのパス（設定ファイルより優先）
    #[arg(long, global = true)]
    pub demo_data: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ダッシュボードを起動（自動接続後、メニューで操作）
    Watch {
        /// 起動時の自動接続を行わない
        #[arg(long)]
        no_auto_load: bool,
    },

    /// 指定ソースから1回だけ読み込んで表示
    Fetch {
        /// データソース (live/demo/embed)
        #[arg(short, long, default_value = "live")]
        source: DataSource,

        /// カードをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Watch { no_auto_load: false }
    }
}
