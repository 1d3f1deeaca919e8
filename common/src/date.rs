//! 採取日の抽出
//!
//! 「Coletado em 11/07/2025」のようなマーカーから日/月を取り出す。

use crate::normalizer::{normalize, CaseFold};
use regex::Regex;

/// 採取日が見つからない場合の表示
pub const DATE_PLACEHOLDER: &str = "??/??";

lazy_static::lazy_static! {
    // 空白除去・小文字化済みテキストに対して検索する
    static ref COLLECTED_ON_RE: Regex =
        Regex::new(r"coletadoem([0-9]{2})/([0-9]{2})/[0-9]{4}").unwrap();
}

/// 採取日（DD/MM）を抽出する
///
/// 最初に現れたマーカーのみを使用する。
/// マーカーがない、または日付の形式が正しくない場合は `None`。
pub fn extract_collection_date(full_text: &str) -> Option<String> {
    let compact = normalize(full_text, CaseFold::Lower, true);

    COLLECTED_ON_RE
        .captures(&compact)
        .map(|cap| format!("{}/{}", &cap[1], &cap[2]))
}
