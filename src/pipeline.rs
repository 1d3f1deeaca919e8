//! 報告書の一括処理
//!
//! 入力順に1件ずつ「テキスト抽出 → 検体照合 → サマリー生成」を行う。
//! 辞書と照合器は最初に一度だけ構築し、以降は読み取り専用で共有する。

use crate::error::Result;
use crate::extractor;
use crate::scanner::DocumentInfo;
use lab_report_common::{build_outcome, AnalyteCatalog, AnalyteMatcher, ReportOutcome};

pub struct LabPipeline {
    catalog: AnalyteCatalog,
    matcher: AnalyteMatcher,
}

impl LabPipeline {
    pub fn new(catalog: AnalyteCatalog) -> Result<Self> {
        let matcher = AnalyteMatcher::new(&catalog.aliases)?;
        Ok(Self { catalog, matcher })
    }

    pub fn catalog(&self) -> &AnalyteCatalog {
        &self.catalog
    }

    /// 抽出済みテキスト1件を処理する
    pub fn process_text(&self, file_name: &str, full_text: &str) -> ReportOutcome {
        build_outcome(file_name, full_text, &self.matcher, &self.catalog.display_order)
    }

    /// 文書1件を処理する
    ///
    /// テキストが取れない文書は空の結果になる。PDFとして読めない場合のみエラー。
    pub fn process_document(&self, document: &DocumentInfo) -> Result<ReportOutcome> {
        let text = extractor::extract_document_text(document)?;
        tracing::debug!(
            file = %document.file_name,
            chars = text.chars().count(),
            "テキスト抽出完了"
        );
        Ok(self.process_text(&document.file_name, &text))
    }

    /// 文書を入力順に処理する
    pub fn process_all(&self, documents: &[DocumentInfo], verbose: bool) -> Result<Vec<ReportOutcome>> {
        let mut outcomes = Vec::with_capacity(documents.len());

        for (idx, document) in documents.iter().enumerate() {
            if verbose {
                println!("  [{}/{}] {}", idx + 1, documents.len(), document.file_name);
            }

            let outcome = self.process_document(document)?;
            if outcome.results.is_empty() {
                tracing::warn!(file = %document.file_name, "検体値が見つかりません");
            }
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
