pub mod excel;
pub mod text;

use crate::cli::ExportFormat;
use crate::error::Result;
use lab_report_common::{DisplayOrder, ReportOutcome};
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        (
            output.join(format!("{}.txt", title)),
            output.join(format!("{}.xlsx", title)),
        )
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        (
            parent.join(format!("{}.txt", stem)),
            parent.join(format!("{}.xlsx", stem)),
        )
    }
}

/// `run` のJSON出力先。ファイル指定なら同じ名前で拡張子を `.json` にする
pub fn json_output_path(output: &Path, title: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.json", title))
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        parent.join(format!("{}.json", stem))
    }
}

/// 抽出結果をJSONで保存する
pub fn write_json(outcomes: &[ReportOutcome], output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(outcomes)?;
    std::fs::write(output, json)?;
    Ok(())
}

/// 保存済みのJSONを読み込む
pub fn read_json(input: &Path) -> Result<Vec<ReportOutcome>> {
    let content = std::fs::read_to_string(input)?;
    let outcomes: Vec<ReportOutcome> = serde_json::from_str(&content)?;
    Ok(outcomes)
}

/// 指定形式でエクスポートし、書き出したファイルのパスを返す
pub fn export_results(
    outcomes: &[ReportOutcome],
    display_order: &DisplayOrder,
    format: &ExportFormat,
    output_dir: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    if output_dir.extension().is_none() {
        std::fs::create_dir_all(output_dir)?;
    }

    let mut written = Vec::new();

    match format {
        ExportFormat::Text => {
            let output_path = output_path_for_format(output_dir, title, "txt");
            println!("- サマリーを出力中...");
            text::write_summaries(outcomes, &output_path)?;
            println!("✔ テキスト出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output_dir, title, "xlsx");
            println!("- Excelを生成中...");
            excel::generate_excel(outcomes, display_order, &output_path)?;
            println!("✔ Excel出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Both => {
            let (text_path, excel_path) = output_paths_for_both(output_dir, title);

            println!("- サマリーを出力中...");
            text::write_summaries(outcomes, &text_path)?;
            println!("✔ テキスト出力: {}", text_path.display());

            println!("- Excelを生成中...");
            excel::generate_excel(outcomes, display_order, &excel_path)?;
            println!("✔ Excel出力: {}", excel_path.display());

            written.push(text_path);
            written.push(excel_path);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for_directory() {
        let path = output_path_for_format(Path::new("saida"), "resultados", "xlsx");
        assert_eq!(path, PathBuf::from("saida/resultados.xlsx"));
    }

    #[test]
    fn test_json_output_path() {
        assert_eq!(
            json_output_path(Path::new("saida"), "resultados"),
            PathBuf::from("saida/resultados.json")
        );
        assert_eq!(
            json_output_path(Path::new("saida/julho.xlsx"), "resultados"),
            PathBuf::from("saida/julho.json")
        );
    }

    #[test]
    fn test_output_path_for_file() {
        let path = output_path_for_format(Path::new("saida/julho.xlsx"), "resultados", "xlsx");
        assert_eq!(path, PathBuf::from("saida/julho.xlsx"));
    }

    #[test]
    fn test_output_paths_for_both_with_file() {
        let (text, excel) = output_paths_for_both(Path::new("saida/julho.xlsx"), "resultados");
        assert_eq!(text, PathBuf::from("saida/julho.txt"));
        assert_eq!(excel, PathBuf::from("saida/julho.xlsx"));
    }
}
