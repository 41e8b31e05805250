// ============================================================================
// I18nPrune - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 模块声明和公共接口导出
// 边界:
//   - ✅ 模块声明
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体实现
//
// ============================================================================

pub mod cli;
pub mod core;
pub mod error;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::{prune_tree, CatalogPruner, KeyClass, KeyClassifier, KeyPath, KeySet};
pub use error::{CatalogError, Result};
