//! lab-report-rust
//!
//! 検査報告書（PDF/テキスト）の読み込み・一括処理・エクスポートを行うCLI側のライブラリ。
//! 正規化と照合の中核は `lab_report_common` にある。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod pipeline;
pub mod scanner;
