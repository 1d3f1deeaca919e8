//! サマリー行の生成
//!
//! `- LAB (11/07): HB: 13.5 | PLAQ: 250` 形式の1行を作り、
//! 報告書1件分の ReportOutcome を組み立てる。

use crate::alias::DisplayOrder;
use crate::date::{extract_collection_date, DATE_PLACEHOLDER};
use crate::matcher::AnalyteMatcher;
use crate::types::{MatchResult, ReportOutcome};

/// サマリー行の先頭
pub const SUMMARY_PREFIX: &str = "- LAB";

/// サマリー行を生成する
///
/// 表示順にある略号のうち、結果に含まれるものだけを並べる。
/// 採取日がなければ `??/??` を使う。
pub fn format_summary(
    results: &MatchResult,
    collection_date: Option<&str>,
    display_order: &DisplayOrder,
) -> String {
    let date = collection_date.unwrap_or(DATE_PLACEHOLDER);

    let blocks: Vec<String> = display_order
        .iter()
        .filter_map(|code| results.get(code).map(|value| format!("{}: {}", code, value)))
        .collect();

    format!("{} ({}): {}", SUMMARY_PREFIX, date, blocks.join(" | "))
}

/// ページごとのテキストを結合する
///
/// テキストのないページ（`None` や空文字列）は読み飛ばし、改行で連結する。
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    pages
        .into_iter()
        .flatten()
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// 報告書1件分の結果を組み立てる
///
/// # Arguments
/// * `file_name` - 元ファイル名
/// * `full_text` - 抽出済みの全文
/// * `matcher` - 検体照合器
/// * `display_order` - サマリー行の略号順
pub fn build_outcome(
    file_name: &str,
    full_text: &str,
    matcher: &AnalyteMatcher,
    display_order: &DisplayOrder,
) -> ReportOutcome {
    let (results, extras) = matcher.match_text(full_text);
    let collection_date = extract_collection_date(full_text);
    let summary = format_summary(&results, collection_date.as_deref(), display_order);

    ReportOutcome {
        file_name: file_name.to_string(),
        collection_date,
        results,
        extras,
        summary,
    }
}
