//! 検体照合モジュール
//!
//! 報告書の全文から辞書の検体値を取り出し、辞書にない数値所見を別途集める。
//!
//! ## 処理フロー
//! 1. 検索テキストの準備（カンマ→ピリオド、改行→空白、アクセント除去、大文字化）
//! 2. 辞書順に検体名ごとにティアを試す（最初に成功したティアを採用）
//! 3. 全文から「大文字の名前 + 数値」を走査し、辞書名・検出済み略号を除いて追加所見とする

pub mod tiers;

pub use tiers::{
    default_tiers, DirectAdjacency, MatchTier, ResultKeyword, ResultKeywordFallback,
    NUMERIC_TOKEN,
};

use crate::alias::AliasTable;
use crate::error::Result;
use crate::normalizer::prepare_search_text;
use crate::types::{ExtraFinding, MatchResult};
use regex::Regex;
use std::collections::HashSet;

lazy_static::lazy_static! {
    // 3文字以上の大文字・空白の並び + 区切り + 数値
    static ref EXTRA_FINDING_RE: Regex =
        Regex::new(r"([A-ZÇÃÕÂÊÁÉÍÓÚÀÜ ]{3,})[.:·\s]*([0-9][0-9.]*)").unwrap();
}

/// コンパイル済みの検体名
struct CompiledAlias {
    /// 正規化済み検体名
    name: String,
    code: String,
    /// ティアと同じ並び
    patterns: Vec<Regex>,
}

/// 検体照合器
///
/// 辞書ごとに一度だけ構築し、報告書ごとに `match_text` を呼ぶ。
pub struct AnalyteMatcher {
    aliases: Vec<CompiledAlias>,
    tiers: Vec<Box<dyn MatchTier>>,
    alias_names: HashSet<String>,
}

impl AnalyteMatcher {
    /// 既定のティア列で照合器を作る
    pub fn new(table: &AliasTable) -> Result<Self> {
        Self::with_tiers(table, default_tiers())
    }

    /// ティア列を指定して照合器を作る
    pub fn with_tiers(table: &AliasTable, tiers: Vec<Box<dyn MatchTier>>) -> Result<Self> {
        let mut aliases = Vec::with_capacity(table.len());

        for entry in table.iter() {
            let name = entry.normalized_name();
            let escaped = regex::escape(&name);
            let patterns = tiers
                .iter()
                .map(|tier| Regex::new(&tier.pattern(&escaped)))
                .collect::<std::result::Result<Vec<_>, _>>()?;

            aliases.push(CompiledAlias {
                name,
                code: entry.code.clone(),
                patterns,
            });
        }

        let alias_names = table.normalized_names();

        Ok(Self {
            aliases,
            tiers,
            alias_names,
        })
    }

    /// 報告書の全文から検体値と追加所見を取り出す
    ///
    /// # Returns
    /// (略号 → 値, 追加所見のリスト)。見つからない検体は結果に含まれない。
    pub fn match_text(&self, full_text: &str) -> (MatchResult, Vec<ExtraFinding>) {
        let text = prepare_search_text(full_text);

        let mut results = MatchResult::new();
        // 全検体名で共有する（検体名ごとではない）
        let mut found: HashSet<String> = HashSet::new();

        for alias in &self.aliases {
            for (tier, pattern) in self.tiers.iter().zip(&alias.patterns) {
                let Some(cap) = pattern.captures(&text) else {
                    continue;
                };

                if !tier.overwrites() && results.contains(&alias.code) {
                    continue;
                }

                let value = &cap[1];
                tracing::debug!(
                    alias = %alias.name,
                    code = %alias.code,
                    tier = tier.label(),
                    value,
                    "検体を検出"
                );
                results.insert(alias.code.clone(), value);
                found.insert(alias.code.clone());
                break;
            }
        }

        let extras = self.collect_extras(&text, &found);
        (results, extras)
    }

    /// 辞書外の数値所見を走査順に集める（重複はそのまま）
    fn collect_extras(&self, text: &str, found: &HashSet<String>) -> Vec<ExtraFinding> {
        EXTRA_FINDING_RE
            .captures_iter(text)
            .filter_map(|cap| {
                let name = cap[1].trim();
                if self.alias_names.contains(name) || found.contains(name) {
                    return None;
                }
                Some(ExtraFinding::new(name, &cap[2]))
            })
            .collect()
    }
}

/// 照合器を作って1回だけ照合する
pub fn match_analytes(
    full_text: &str,
    table: &AliasTable,
) -> Result<(MatchResult, Vec<ExtraFinding>)> {
    let matcher = AnalyteMatcher::new(table)?;
    Ok(matcher.match_text(full_text))
}
