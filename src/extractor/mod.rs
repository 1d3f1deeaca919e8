//! 報告書のテキスト抽出
//!
//! PDFはページごとに抽出して改行で連結し、テキストファイルはそのまま使う。
//! テキストのないページは黙って読み飛ばす。

pub mod pdf;

pub use pdf::PdfDocument;

use crate::error::Result;
use crate::scanner::{DocumentInfo, DocumentKind};
use lab_report_common::join_pages;

/// ページ単位でテキストを取り出せる文書
pub trait PageText {
    fn page_count(&self) -> usize;

    /// テキストがないページは `None`
    fn page_text(&self, index: usize) -> Option<String>;

    /// 全ページのテキストを改行で連結する
    fn full_text(&self) -> String {
        join_pages((0..self.page_count()).map(|i| self.page_text(i)))
    }
}

/// 抽出済みのページテキスト（テキストファイルは1ページとして扱う）
impl PageText for [Option<String>] {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> Option<String> {
        self.get(index).cloned().flatten()
    }
}

/// 報告書の全文を取得する
pub fn extract_document_text(document: &DocumentInfo) -> Result<String> {
    match document.kind {
        DocumentKind::Pdf => Ok(PdfDocument::load(&document.path)?.full_text()),
        DocumentKind::Text => {
            let bytes = std::fs::read(&document.path)?;
            let pages = [Some(String::from_utf8_lossy(&bytes).into_owned())];
            Ok(pages.as_slice().full_text())
        }
    }
}
