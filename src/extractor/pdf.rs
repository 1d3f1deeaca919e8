//! PDFのページ単位テキスト抽出（lopdf）

use super::PageText;
use crate::error::{LabReportError, Result};
use lopdf::Document;
use std::path::Path;

/// 読み込み済みPDF
pub struct PdfDocument {
    doc: Document,
    /// ページ番号（1始まり、ページ順）
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let doc = Document::load(path)
            .map_err(|e| LabReportError::PdfLoad(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_document(doc))
    }

    pub fn load_mem(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes).map_err(|e| LabReportError::PdfLoad(e.to_string()))?;
        Ok(Self::from_document(doc))
    }

    fn from_document(doc: Document) -> Self {
        let page_numbers = doc.get_pages().into_keys().collect();
        Self { doc, page_numbers }
    }
}

impl PageText for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Option<String> {
        let page_num = *self.page_numbers.get(index)?;

        match self.doc.extract_text(&[page_num]) {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => {
                tracing::debug!(page = page_num, "テキストのないページをスキップ");
                None
            }
            Err(e) => {
                tracing::warn!(page = page_num, error = %e, "ページのテキスト抽出に失敗、スキップ");
                None
            }
        }
    }
}
