use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabReportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("対応していないファイル形式です（.pdf/.txt）: {0}")]
    UnsupportedFile(String),

    #[error("PDF読み込みエラー: {0}")]
    PdfLoad(String),

    #[error("報告書が見つかりません: {0}")]
    NoDocumentsFound(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] lab_report_common::Error),
}

pub type Result<T> = std::result::Result<T, LabReportError>;
