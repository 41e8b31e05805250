// ============================================================================
// I18nPrune - 错误类型
// ============================================================================
//
// 文件: src/error.rs
// 职责: 翻译文件读写与规则构建的错误定义
// 边界:
//   - ✅ 库层错误枚举定义
//   - ✅ 错误上下文（文件路径）携带
//   - ❌ 不应包含错误展示和国际化
//   - ❌ 不应包含 CLI 退出码处理
//
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// 翻译文件处理错误
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 文件不存在或无法读取
    #[error("Failed to read translation file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 文件无法写入
    #[error("Failed to write translation file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 语法错误
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 顶层不是对象
    #[error("Translation file {path} must contain a JSON object at the top level")]
    NotAnObject { path: PathBuf },

    /// 序列化失败
    #[error("Failed to serialize translation tree: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 目录扫描模式无效
    #[error("Invalid catalog pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// 目录扫描时某个条目无法读取
    #[error("Failed to scan catalog directory: {0}")]
    Scan(#[from] glob::GlobError),

    /// 分类正则无效
    #[error("Invalid key pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl CatalogError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// CatalogError 的 Result 别名
pub type Result<T> = std::result::Result<T, CatalogError>;
