//! テキスト正規化
//!
//! アクセント（結合文字）の除去・大文字小文字の統一・空白の除去を行う。
//! ロケールには依存せず、呼び出し側が毎回明示的にオプションを渡す。

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 大文字小文字の統一方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFold {
    /// 大文字に統一（検体名の照合）
    Upper,
    /// 小文字に統一（採取日マーカーの検索）
    Lower,
    /// 変換しない
    #[default]
    Keep,
}

/// アクセントを除去する
///
/// NFDで分解し、結合文字をすべて捨てる（再合成はしない）。
/// `á` → `a`, `ç` → `c`, `ã` → `a`
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// テキストを正規化する
///
/// # Arguments
/// * `text` - 入力テキスト
/// * `case` - 大文字小文字の統一方法
/// * `strip_spaces` - 空白文字（改行を含む）をすべて除去する
pub fn normalize(text: &str, case: CaseFold, strip_spaces: bool) -> String {
    let stripped = strip_diacritics(text);

    let folded = match case {
        CaseFold::Upper => stripped.to_uppercase(),
        CaseFold::Lower => stripped.to_lowercase(),
        CaseFold::Keep => stripped,
    };

    if strip_spaces {
        folded.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        folded
    }
}

/// 検体照合用の検索テキストを作る
///
/// 小数点のカンマをピリオドに、改行を半角スペースに置換した上で
/// アクセント除去・大文字化する。照合と追加所見の抽出はすべてこの結果に対して行う。
pub fn prepare_search_text(text: &str) -> String {
    let replaced = text.replace(',', ".").replace('\n', " ");
    normalize(&replaced, CaseFold::Upper, false)
}
