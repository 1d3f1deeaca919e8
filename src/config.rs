use crate::error::{LabReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// エイリアス辞書のパスを上書きする環境変数
pub const ALIASES_ENV: &str = "LAB_REPORT_ALIASES";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 既定のエイリアス辞書JSON
    pub alias_file: Option<PathBuf>,
    /// エクスポートファイル名（拡張子なし）
    pub output_title: String,
    /// フォルダをサブフォルダまでスキャンする
    pub recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alias_file: None,
            output_title: "resultados_laboratorio".into(),
            recursive: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LabReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("lab-report").join("config.json"))
    }

    /// 使用するエイリアス辞書のパス
    ///
    /// 優先順位: コマンドライン引数 > 環境変数 > 設定ファイル
    pub fn resolve_alias_file(&self, cli_value: Option<PathBuf>) -> Option<PathBuf> {
        cli_value
            .or_else(|| std::env::var_os(ALIASES_ENV).map(PathBuf::from))
            .or_else(|| self.alias_file.clone())
    }

    pub fn set_alias_file(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(LabReportError::FileNotFound(path.display().to_string()));
        }
        // 登録前に辞書として読めることを確認
        lab_report_common::AnalyteCatalog::from_file(&path)?;
        self.alias_file = Some(path);
        self.save()
    }
}
