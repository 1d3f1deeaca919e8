//! 照合ティア
//!
//! 検体名ごとに上から順に試し、最初に成功したティアの値を採用する。
//! 新しいティアは `MatchTier` を実装して `default_tiers` に追加する。

/// 数値トークン（先頭は数字、以降は数字とピリオド）
pub const NUMERIC_TOKEN: &str = r"([0-9][0-9.]*)";

/// 照合ティア
pub trait MatchTier: Send + Sync {
    /// ログ用の名前
    fn label(&self) -> &'static str;

    /// 正規表現パターンを組み立てる
    ///
    /// `alias` はエスケープ済みの正規化検体名。値は第1キャプチャで返すこと。
    fn pattern(&self, alias: &str) -> String;

    /// 同じ略号の値が既にあるときに上書きできるか
    fn overwrites(&self) -> bool {
        true
    }
}

/// ティア1: 検体名の直後の値（例: `TGO: 17`）
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAdjacency;

impl MatchTier for DirectAdjacency {
    fn label(&self) -> &'static str {
        "direct"
    }

    fn pattern(&self, alias: &str) -> String {
        format!(r"{alias}[.:·\s]*{NUMERIC_TOKEN}")
    }
}

/// ティア2: 検体名の後の `RESULTADO: 17`
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultKeyword;

impl MatchTier for ResultKeyword {
    fn label(&self) -> &'static str {
        "resultado"
    }

    fn pattern(&self, alias: &str) -> String {
        format!(r"{alias}.*?RESULTADO[.:·\-\s]*{NUMERIC_TOKEN}")
    }
}

/// ティア3: `RESULTADO` の後の数字以外をすべて読み飛ばす
///
/// 既に値がある略号は上書きしない。
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultKeywordFallback;

impl MatchTier for ResultKeywordFallback {
    fn label(&self) -> &'static str {
        "resultado-fallback"
    }

    fn pattern(&self, alias: &str) -> String {
        format!(r"{alias}.*?RESULTADO[^0-9]*{NUMERIC_TOKEN}")
    }

    fn overwrites(&self) -> bool {
        false
    }
}

/// 既定のティア列
pub fn default_tiers() -> Vec<Box<dyn MatchTier>> {
    vec![
        Box::new(DirectAdjacency),
        Box::new(ResultKeyword),
        Box::new(ResultKeywordFallback),
    ]
}
