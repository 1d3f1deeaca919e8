//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを作り、ファイルに書き出す

use crate::error::{LabReportError, Result};
use lab_report_common::export::excel_core::generate_excel_buffer;
use lab_report_common::{DisplayOrder, ReportOutcome};
use std::path::Path;

pub fn generate_excel(
    outcomes: &[ReportOutcome],
    display_order: &DisplayOrder,
    output_path: &Path,
) -> Result<()> {
    let buffer =
        generate_excel_buffer(outcomes, display_order).map_err(LabReportError::ExcelGeneration)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
