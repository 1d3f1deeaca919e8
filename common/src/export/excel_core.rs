//! Excel生成（共通ライブラリ）
//!
//! 報告書ごとの結果表（シート「Resumo」）と追加所見（シート「Extras」）を出力する。

use crate::alias::DisplayOrder;
use crate::date::DATE_PLACEHOLDER;
use crate::types::ReportOutcome;
use rust_xlsxwriter::*;

/// 結果表のシート名
pub const SUMMARY_SHEET: &str = "Resumo";
/// 追加所見のシート名
pub const EXTRAS_SHEET: &str = "Extras";

const FILE_COL_WIDTH: f64 = 32.0;
const DATE_COL_WIDTH: f64 = 8.0;
const CODE_COL_WIDTH: f64 = 9.0;
const SUMMARY_COL_WIDTH: f64 = 80.0;

/// Excelをバッファに生成
///
/// # Arguments
/// * `outcomes` - 報告書ごとの結果（入力順）
/// * `display_order` - 略号列の並び
pub fn generate_excel_buffer(
    outcomes: &[ReportOutcome],
    display_order: &DisplayOrder,
) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // 結果表
    {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SUMMARY_SHEET)
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        let codes = display_order.codes();
        let summary_col = (codes.len() + 2) as u16;

        let mut headers: Vec<&str> = vec!["Arquivo", "Data"];
        headers.extend(codes.iter().map(String::as_str));
        headers.push("Resumo");

        for (col, header) in headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
        }

        worksheet
            .set_column_width(0, FILE_COL_WIDTH)
            .and_then(|ws| ws.set_column_width(1, DATE_COL_WIDTH))
            .and_then(|ws| ws.set_column_width(summary_col, SUMMARY_COL_WIDTH))
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        for col in 2..summary_col {
            worksheet
                .set_column_width(col, CODE_COL_WIDTH)
                .map_err(|e| format!("列幅設定エラー: {}", e))?;
        }

        for (idx, outcome) in outcomes.iter().enumerate() {
            let row = (idx + 1) as u32;
            let date = outcome.collection_date.as_deref().unwrap_or(DATE_PLACEHOLDER);

            worksheet
                .write_string_with_format(row, 0, &outcome.file_name, &value_format)
                .and_then(|ws| ws.write_string_with_format(row, 1, date, &value_format))
                .and_then(|ws| {
                    ws.write_string_with_format(row, summary_col, &outcome.summary, &value_format)
                })
                .map_err(|e| format!("値書き込みエラー: {}", e))?;

            for (offset, code) in codes.iter().enumerate() {
                let value = outcome.results.get(code).unwrap_or("");
                worksheet
                    .write_string_with_format(row, (offset + 2) as u16, value, &value_format)
                    .map_err(|e| format!("値書き込みエラー: {}", e))?;
            }
        }

        worksheet
            .set_freeze_panes(1, 1)
            .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;
    }

    // 追加所見
    {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(EXTRAS_SHEET)
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        for (col, header) in ["Arquivo", "Nome", "Valor"].iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
        }
        worksheet
            .set_column_width(0, FILE_COL_WIDTH)
            .and_then(|ws| ws.set_column_width(1, FILE_COL_WIDTH))
            .map_err(|e| format!("列幅設定エラー: {}", e))?;

        let mut row: u32 = 1;
        for outcome in outcomes {
            for extra in &outcome.extras {
                worksheet
                    .write_string_with_format(row, 0, &outcome.file_name, &value_format)
                    .and_then(|ws| ws.write_string_with_format(row, 1, &extra.name, &value_format))
                    .and_then(|ws| ws.write_string_with_format(row, 2, &extra.value, &value_format))
                    .map_err(|e| format!("値書き込みエラー: {}", e))?;
                row += 1;
            }
        }
    }

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExtraFinding, MatchResult};

    #[test]
    fn test_generate_excel_buffer() {
        let outcomes = vec![
            ReportOutcome {
                file_name: "a.pdf".to_string(),
                collection_date: Some("11/07".to_string()),
                results: [("HB", "13.5")].into_iter().collect(),
                extras: vec![ExtraFinding::new("FERRITINA", "80")],
                summary: "- LAB (11/07): HB: 13.5".to_string(),
            },
            ReportOutcome {
                file_name: "b.pdf".to_string(),
                results: MatchResult::new(),
                summary: "- LAB (??/??): ".to_string(),
                ..Default::default()
            },
        ];
        let order: DisplayOrder = ["HB", "HT"].into_iter().collect();

        let buffer = generate_excel_buffer(&outcomes, &order).unwrap();
        // xlsxはzipアーカイブ
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_excel_buffer_empty() {
        let buffer = generate_excel_buffer(&[], &DisplayOrder::default()).unwrap();
        assert!(!buffer.is_empty());
    }
}
