//! Lab Report Common Library
//!
//! 検査報告書テキストの正規化・検体照合・サマリー生成（CLIから利用される中核部分）

pub mod types;
pub mod normalizer;
pub mod date;
pub mod alias;
pub mod error;
pub mod matcher;
pub mod report;
pub mod export;

pub use types::{ExtraFinding, MatchResult, ReportOutcome};
pub use normalizer::{normalize, prepare_search_text, strip_diacritics, CaseFold};
pub use date::{extract_collection_date, DATE_PLACEHOLDER};
pub use alias::{load_catalog, AliasEntry, AliasTable, AnalyteCatalog, DisplayOrder};
pub use error::{Error, Result};
pub use matcher::{match_analytes, AnalyteMatcher, MatchTier};
pub use report::{build_outcome, format_summary, join_pages};
