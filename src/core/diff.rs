// ============================================================================
// I18nPrune - 多余键检测
// ============================================================================
//
// 文件: src/core/diff.rs
// 职责: 目标键集合相对参考键集合的差集计算
// 边界:
//   - ✅ 纯集合运算
//   - ❌ 不应包含分类和删除逻辑
//
// ============================================================================

use super::flatten::KeySet;

/// 计算目标中存在而参考中不存在的键
pub fn extra_keys(reference: &KeySet, target: &KeySet) -> KeySet {
    target.difference(reference).cloned().collect()
}
