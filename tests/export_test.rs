//! サマリー/Excel/JSON出力の統合テスト

use lab_report_common::{AnalyteCatalog, ExtraFinding, ReportOutcome};
use lab_report_rust::cli::ExportFormat;
use lab_report_rust::export::{self, excel, text};
use tempfile::tempdir;

fn create_test_outcome(index: usize) -> ReportOutcome {
    ReportOutcome {
        file_name: format!("laudo_{}.pdf", index),
        collection_date: Some(format!("{:02}/07", index)),
        results: [("HB", "13.5"), ("PLAQ", "250")].into_iter().collect(),
        extras: vec![ExtraFinding::new("FERRITINA", format!("{}", 80 + index))],
        summary: format!("- LAB ({:02}/07): HB: 13.5 | PLAQ: 250", index),
    }
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("resultados.xlsx");
    let catalog = AnalyteCatalog::builtin().unwrap();

    let outcomes: Vec<ReportOutcome> = (1..=5).map(create_test_outcome).collect();

    let result = excel::generate_excel(&outcomes, &catalog.display_order, &output_path);

    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());
    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_excel_generation_empty_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.xlsx");
    let catalog = AnalyteCatalog::builtin().unwrap();

    let result = excel::generate_excel(&[], &catalog.display_order, &output_path);

    assert!(result.is_ok(), "空のExcel生成に失敗: {:?}", result.err());
}

#[test]
fn test_text_summaries() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("resumo.txt");

    let outcomes: Vec<ReportOutcome> = (1..=2).map(create_test_outcome).collect();
    text::write_summaries(&outcomes, &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        content,
        "- LAB (01/07): HB: 13.5 | PLAQ: 250\n- LAB (02/07): HB: 13.5 | PLAQ: 250\n"
    );
}

#[test]
fn test_json_round_trip_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("saida").join("result.json");

    let outcomes: Vec<ReportOutcome> = (1..=3).map(create_test_outcome).collect();
    export::write_json(&outcomes, &output_path).unwrap();

    let loaded = export::read_json(&output_path).unwrap();
    assert_eq!(loaded, outcomes);
}

#[test]
fn test_export_both_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = AnalyteCatalog::builtin().unwrap();
    let outcomes: Vec<ReportOutcome> = (1..=2).map(create_test_outcome).collect();

    let written = export::export_results(
        &outcomes,
        &catalog.display_order,
        &ExportFormat::Both,
        dir.path(),
        "julho",
    )
    .unwrap();

    assert_eq!(written.len(), 2);
    assert!(dir.path().join("julho.txt").exists());
    assert!(dir.path().join("julho.xlsx").exists());
}

#[test]
fn test_export_to_file_path_keeps_files_side_by_side() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = AnalyteCatalog::builtin().unwrap();
    let outcomes: Vec<ReportOutcome> = (1..=2).map(create_test_outcome).collect();
    let output = dir.path().join("out.xlsx");

    let json_path = export::json_output_path(&output, "resultados");
    export::write_json(&outcomes, &json_path).unwrap();
    let written = export::export_results(
        &outcomes,
        &catalog.display_order,
        &ExportFormat::Excel,
        &output,
        "resultados",
    )
    .unwrap();

    assert_eq!(json_path, dir.path().join("out.json"));
    assert_eq!(written, vec![output.clone()]);
    assert!(output.is_file(), "out.xlsx がディレクトリになっている");
    assert!(json_path.is_file());
}
