// ============================================================================
// I18nPrune - 清理报告数据模型
// ============================================================================
//
// 文件: src/models/report.rs
// 职责: 单个翻译文件清理结果的数据结构定义
// 边界:
//   - ✅ 报告数据结构定义
//   - ✅ 报告序列化
//   - ✅ 基础统计方法
//   - ❌ 不应包含清理逻辑
//   - ❌ 不应包含输出格式化
//
// ============================================================================

use serde::Serialize;
use std::path::PathBuf;

use crate::core::pruner::PruneOutcome;

/// 多余键按分类的数量（删除前）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    pub redundant_section: usize,
    pub array_artifact: usize,
    pub generic_extra: usize,
}

/// 单棵翻译树的清理结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct TreeReport {
    /// 多余键总数
    pub extra_keys: usize,
    /// 各分类的多余键数量
    pub classified: ClassCounts,
    /// 因保护规则保留的键
    pub protected_keys: Vec<String>,
    /// 属于补齐配置而保留的键
    pub kept_fill_keys: Vec<String>,
    /// 受保护命名空间中的扁平多余键数量
    pub protected_namespace_flat_keys: usize,
    /// 删除统计
    pub outcome: PruneOutcome,
    /// 补齐的翻译数量
    pub filled: usize,
    /// 清理前规范化编码字节数
    pub size_before: usize,
    /// 清理后规范化编码字节数
    pub size_after: usize,
}

impl TreeReport {
    /// 是否有需要删除的键
    pub fn has_deletable(&self) -> bool {
        self.extra_keys > self.protected_keys.len() + self.kept_fill_keys.len()
    }

    /// 是否修改了翻译树
    pub fn has_changes(&self) -> bool {
        self.outcome.total_removed() > 0 || self.filled > 0
    }

    /// 节省的字节数（补齐可能使其为负）
    pub fn saved_bytes(&self) -> i64 {
        self.size_before as i64 - self.size_after as i64
    }
}

/// 单个翻译文件的清理报告
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// 语言
    pub lang: String,
    /// 文件路径
    pub path: PathBuf,
    /// 是否已写回文件
    pub written: bool,
    #[serde(flatten)]
    pub tree: TreeReport,
}

/// 一次运行的汇总
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    pub files: usize,
    pub files_changed: usize,
    pub keys_removed: usize,
    pub bytes_saved: i64,
}

impl RunTotals {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        reports.iter().fold(Self::default(), |mut totals, report| {
            totals.files += 1;
            if report.tree.has_changes() {
                totals.files_changed += 1;
            }
            totals.keys_removed += report.tree.outcome.total_removed();
            totals.bytes_saved += report.tree.saved_bytes();
            totals
        })
    }
}
