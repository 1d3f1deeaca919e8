use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lab-report")]
#[command(about = "検査報告書PDFから検体値を抽出し、サマリー行と結果表を生成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// エイリアス辞書の指定
#[derive(Args, Clone, Debug, Default)]
pub struct AliasArgs {
    /// エイリアス辞書JSON（組み込み辞書に上書きマージ）
    #[arg(long)]
    pub aliases: Option<PathBuf>,

    /// 組み込み辞書を使わず、--aliases の辞書のみを使う
    #[arg(long)]
    pub replace_aliases: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 報告書（PDF/テキスト）を解析してJSONを出力
    Extract {
        /// 報告書ファイルまたはフォルダ
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// 出力JSONファイル
        #[arg(short, long, default_value = "result.json")]
        output: PathBuf,

        #[command(flatten)]
        alias: AliasArgs,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 解析結果JSONからサマリー/Excelを生成
    Export {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力形式 (text/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力ファイル名（拡張子なし）
        #[arg(short, long)]
        title: Option<String>,

        #[command(flatten)]
        alias: AliasArgs,
    },

    /// 解析からサマリー/Excel出力まで一括実行
    Run {
        /// 報告書ファイルまたはフォルダ
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (text/excel/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        #[command(flatten)]
        alias: AliasArgs,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 使用中のエイリアス辞書と表示順を表示
    Aliases {
        #[command(flatten)]
        alias: AliasArgs,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のエイリアス辞書を設定
        #[arg(long)]
        set_alias_file: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Excel,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use text, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
