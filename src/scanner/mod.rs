use crate::error::{LabReportError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 入力ファイルの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF（ページごとにテキスト抽出）
    Pdf,
    /// 抽出済みテキスト
    Text,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: DocumentKind,
}

impl DocumentInfo {
    fn new(path: &Path, kind: DocumentKind) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            file_name,
            kind,
        }
    }
}

/// フォルダ内のPDF/テキストを列挙する（ファイル名順）
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<DocumentInfo>> {
    if !folder.is_dir() {
        return Err(LabReportError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut documents = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(kind) = DocumentKind::from_path(path) {
            documents.push(DocumentInfo::new(path, kind));
        }
    }

    // ファイル名でソート
    documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(documents)
}

/// コマンドラインの入力（ファイル・フォルダ混在）を展開する
///
/// 入力の順序を保ち、フォルダはその位置で中身に展開する。
pub fn scan_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<DocumentInfo>> {
    let mut documents = Vec::new();

    for input in inputs {
        if input.is_dir() {
            documents.extend(scan_folder(input, recursive)?);
            continue;
        }

        if !input.exists() {
            return Err(LabReportError::FileNotFound(input.display().to_string()));
        }

        let kind = DocumentKind::from_path(input)
            .ok_or_else(|| LabReportError::UnsupportedFile(input.display().to_string()))?;
        documents.push(DocumentInfo::new(input, kind));
    }

    Ok(documents)
}
