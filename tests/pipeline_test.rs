//! 報告書PDFの一括処理テスト
//!
//! lopdfで小さなPDFを組み立て、抽出からサマリー行までを検証する

use lab_report_common::{AnalyteCatalog, ExtraFinding};
use lab_report_rust::extractor::{PageText, PdfDocument};
use lab_report_rust::pipeline::LabPipeline;
use lab_report_rust::scanner;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::Path;
use tempfile::tempdir;

/// 1ページ = 行のリスト。空のリストはテキストのないページになる
fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![50.into(), (780 - 20 * i as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn write_pdf(dir: &Path, name: &str, pages: &[&[&str]]) {
    std::fs::write(dir.join(name), build_pdf(pages)).unwrap();
}

fn pipeline() -> LabPipeline {
    LabPipeline::new(AnalyteCatalog::builtin().unwrap()).unwrap()
}

#[test]
fn test_pdf_pages_are_joined() {
    let bytes = build_pdf(&[&["Hemoglobina: 13,5"], &[], &["Plaquetas: 250"]]);
    let pdf = PdfDocument::load_mem(&bytes).unwrap();

    assert_eq!(pdf.page_count(), 3);
    assert!(pdf.page_text(1).is_none(), "空ページはスキップされる");

    let text = pdf.full_text();
    assert!(text.contains("Hemoglobina: 13,5"));
    assert!(text.contains("Plaquetas: 250"));
}

#[test]
fn test_pdf_report_summary() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_pdf(
        dir.path(),
        "hemograma.pdf",
        &[
            &["LABORATORIO CENTRAL", "Coletado em 11/07/2025", "Hemoglobina: 13,5"],
            &[],
            &["Plaquetas: 250", "Ferritina: 80"],
        ],
    );

    let documents = scanner::scan_folder(dir.path(), false).unwrap();
    let outcomes = pipeline().process_all(&documents, false).unwrap();

    assert_eq!(outcomes.len(), 1);
    let outcome = &outcomes[0];
    assert_eq!(outcome.file_name, "hemograma.pdf");
    assert_eq!(outcome.collection_date.as_deref(), Some("11/07"));
    assert_eq!(outcome.results.get("HB"), Some("13.5"));
    assert_eq!(outcome.results.get("PLAQ"), Some("250"));
    assert_eq!(outcome.summary, "- LAB (11/07): HB: 13.5 | PLAQ: 250");
    assert!(outcome.extras.contains(&ExtraFinding::new("FERRITINA", "80")));
}

#[test]
fn test_pdf_without_text() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_pdf(dir.path(), "digitalizado.pdf", &[&[], &[]]);

    let documents = scanner::scan_folder(dir.path(), false).unwrap();
    let outcomes = pipeline().process_all(&documents, false).unwrap();

    assert!(outcomes[0].results.is_empty());
    assert!(outcomes[0].extras.is_empty());
    assert_eq!(outcomes[0].summary, "- LAB (??/??): ");
}

#[test]
fn test_mixed_inputs_keep_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_pdf(dir.path(), "b.pdf", &[&["TGO: 17", "TGP: 22"]]);
    std::fs::write(
        dir.path().join("a.txt"),
        "Coletado em 02/08/2025\nColesterol total: 190\nColesterol HDL: 45",
    )
    .unwrap();

    let inputs = vec![dir.path().join("b.pdf"), dir.path().join("a.txt")];
    let documents = scanner::scan_inputs(&inputs, false).unwrap();
    let outcomes = pipeline().process_all(&documents, false).unwrap();

    assert_eq!(outcomes[0].file_name, "b.pdf");
    assert_eq!(outcomes[0].summary, "- LAB (??/??): TGO: 17 | TGP: 22");
    assert_eq!(outcomes[1].file_name, "a.txt");
    assert_eq!(outcomes[1].summary, "- LAB (02/08): COL-T: 190 | HDL: 45");
}

#[test]
fn test_custom_alias_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let alias_path = dir.path().join("aliases.json");
    std::fs::write(
        &alias_path,
        r#"{
            "aliases": [{"name": "Ferritina", "code": "FERR"}],
            "displayOrder": ["HB", "FERR"]
        }"#,
    )
    .unwrap();

    let catalog = lab_report_common::load_catalog(Some(&alias_path), false).unwrap();
    let pipeline = LabPipeline::new(catalog).unwrap();
    let outcome = pipeline.process_text("x.txt", "Hemoglobina 14,1 Ferritina: 80");

    assert_eq!(outcome.summary, "- LAB (??/??): HB: 14.1 | FERR: 80");
    assert!(outcome.extras.is_empty());
}
