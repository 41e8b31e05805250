// ============================================================================
// I18nPrune - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心清理逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//
// ============================================================================

pub mod catalog;
pub mod classifier;
pub mod diff;
pub mod fill;
pub mod flatten;
pub mod pipeline;
pub mod pruner;

// 重新导出常用类型
pub use classifier::{Classification, ClassifiedKey, KeyClass, KeyClassifier};
pub use flatten::{KeyPath, KeySet};
pub use pipeline::{prune_tree, CatalogPruner};
pub use pruner::{PruneOutcome, RemovedSection};
