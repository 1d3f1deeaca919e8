//! 検体エイリアス辞書モジュール
//!
//! 検査報告書に現れる検体名 → 略号（HB, PLAQ など）の対応表と、
//! サマリー行に並べる略号の順序を管理する。
//! 辞書はJSONデータとして外部化し、組み込みの既定辞書に重ねて使う。

use crate::error::{Error, Result};
use crate::normalizer::{normalize, CaseFold};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 組み込み辞書（JSON）
pub const DEFAULT_CATALOG_JSON: &str = include_str!("../data/default_catalog.json");

/// エイリアス1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// 報告書上の検体名（アクセント付きのまま記述してよい）
    pub name: String,
    /// 略号
    pub code: String,
}

impl AliasEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// 照合用に正規化した検体名（アクセント除去・大文字）
    pub fn normalized_name(&self) -> String {
        normalize(&self.name, CaseFold::Upper, false)
    }
}

/// エイリアス表
///
/// 並び順は照合の試行順。同じ略号を持つ複数の検体名があるとき、
/// どちらの値が残るかだけに影響する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    pub fn new(entries: Vec<AliasEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 正規化済み検体名の集合
    pub fn normalized_names(&self) -> HashSet<String> {
        self.entries.iter().map(AliasEntry::normalized_name).collect()
    }

    /// 登録されている略号の集合
    pub fn codes(&self) -> HashSet<&str> {
        self.entries.iter().map(|e| e.code.as_str()).collect()
    }

    /// 同名（正規化後）のエントリは位置を保ったまま置換、なければ末尾に追加
    fn upsert(&mut self, entry: AliasEntry) {
        let key = entry.normalized_name();
        match self.entries.iter_mut().find(|e| e.normalized_name() == key) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }
}

/// サマリー行の略号順
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayOrder(Vec<String>);

impl DisplayOrder {
    pub fn new(codes: Vec<String>) -> Self {
        Self(codes)
    }

    pub fn codes(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DisplayOrder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// 辞書全体（エイリアス表 + 表示順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyteCatalog {
    #[serde(default)]
    pub aliases: AliasTable,
    #[serde(default)]
    pub display_order: DisplayOrder,
}

impl AnalyteCatalog {
    /// 組み込み辞書
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_CATALOG_JSON)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// 空の検体名・略号を拒否する
    pub fn validate(&self) -> Result<()> {
        for entry in self.aliases.iter() {
            if entry.normalized_name().trim().is_empty() {
                return Err(Error::Config(format!(
                    "検体名が空です（略号: {}）",
                    entry.code
                )));
            }
            if entry.code.trim().is_empty() {
                return Err(Error::Config(format!("略号が空です（検体名: {}）", entry.name)));
            }
        }

        if self.display_order.iter().any(|c| c.trim().is_empty()) {
            return Err(Error::Config("表示順に空の略号があります".into()));
        }

        let codes = self.aliases.codes();
        for code in self.display_order.iter() {
            if !codes.contains(code) {
                tracing::debug!("表示順の略号 {} に対応する検体名がありません", code);
            }
        }

        Ok(())
    }

    /// 設定をマージ（後から追加した設定が優先）
    pub fn merge(&mut self, other: &AnalyteCatalog) {
        for entry in other.aliases.iter() {
            self.aliases.upsert(entry.clone());
        }
        if !other.display_order.is_empty() {
            self.display_order = other.display_order.clone();
        }
    }
}

/// 使用する辞書を決定する
///
/// # Arguments
/// * `alias_file` - ユーザー辞書JSON
/// * `replace` - trueなら組み込み辞書を使わずユーザー辞書のみ
pub fn load_catalog(alias_file: Option<&std::path::Path>, replace: bool) -> Result<AnalyteCatalog> {
    let mut catalog = if replace {
        AnalyteCatalog::default()
    } else {
        AnalyteCatalog::builtin()?
    };

    match alias_file {
        Some(path) => {
            let custom = AnalyteCatalog::from_file(path)?;
            catalog.merge(&custom);
        }
        None if replace => {
            return Err(Error::Config(
                "組み込み辞書を置き換えるにはエイリアスファイルを指定してください".into(),
            ));
        }
        None => {}
    }

    Ok(catalog)
}
