//! サマリー行のテキスト出力

use crate::error::Result;
use lab_report_common::ReportOutcome;
use std::path::Path;

/// 1報告書1行で書き出す
pub fn render_summaries(outcomes: &[ReportOutcome]) -> String {
    outcomes
        .iter()
        .map(|o| format!("{}\n", o.summary))
        .collect()
}

pub fn write_summaries(outcomes: &[ReportOutcome], output_path: &Path) -> Result<()> {
    std::fs::write(output_path, render_summaries(outcomes))?;
    Ok(())
}
