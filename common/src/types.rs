//! 抽出結果の型定義
//!
//! - MatchResult: 略号 → 値（1報告書分）
//! - ExtraFinding: 辞書にない名前の数値所見
//! - ReportOutcome: 報告書1件の最終出力

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 略号 → 値のマップ
///
/// 値は小数点がピリオドの生の文字列（数値には変換しない）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchResult(BTreeMap<String, String>);

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// 値を記録する（既存の値は上書き）
    pub fn insert(&mut self, code: impl Into<String>, value: impl Into<String>) {
        self.0.insert(code.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MatchResult {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// 辞書外の数値所見
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraFinding {
    pub name: String,
    pub value: String,
}

impl ExtraFinding {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// 報告書1件分の抽出結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutcome {
    pub file_name: String,

    /// 採取日（DD/MM）
    #[serde(default)]
    pub collection_date: Option<String>,

    #[serde(default)]
    pub results: MatchResult,

    #[serde(default)]
    pub extras: Vec<ExtraFinding>,

    /// サマリー行（"- LAB (11/07): HB: 13.5 | ..."）
    #[serde(default)]
    pub summary: String,
}
