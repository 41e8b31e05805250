// ============================================================================
// I18nPrune - 缺失翻译补齐
// ============================================================================
//
// 文件: src/core/fill.rs
// 职责: 清理后按配置补齐指定的缺失叶子
// 边界:
//   - ✅ 父节点存在且叶子缺失时写入
//   - ❌ 不应创建中间节点
//   - ❌ 不应覆盖已有翻译
//
// ============================================================================

use serde_json::Value;
use tracing::debug;

use super::flatten::KeyPath;
use crate::models::config::FillEntry;

/// 应用补齐条目，返回实际写入的数量
pub fn apply_fills(tree: &mut Value, fills: &[&FillEntry]) -> usize {
    fills.iter().filter(|fill| fill_one(tree, fill)).count()
}

fn fill_one(tree: &mut Value, fill: &FillEntry) -> bool {
    let path = KeyPath::from_dotted(&fill.key);
    let Some((leaf, parents)) = path.segments().split_last() else {
        return false;
    };

    let mut node = &mut *tree;
    for segment in parents {
        match node.as_object_mut().and_then(|map| map.get_mut(segment)) {
            Some(child) => node = child,
            None => {
                debug!(key = %fill.key, "fill skipped, parent missing");
                return false;
            }
        }
    }

    match node.as_object_mut() {
        Some(map) if !map.contains_key(leaf) => {
            map.insert(leaf.clone(), Value::String(fill.value.clone()));
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(key: &str, value: &str) -> FillEntry {
        FillEntry {
            lang: "fr".to_string(),
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn fills_missing_leaf_under_existing_parent() {
        let mut tree = json!({ "filters": { "status": { "actif": "Actif" } } });
        let fill = entry("filters.status.termine", "Terminé");

        assert_eq!(apply_fills(&mut tree, &[&fill]), 1);
        assert_eq!(tree["filters"]["status"]["termine"], json!("Terminé"));
    }

    #[test]
    fn never_overwrites_or_creates_parents() {
        let mut tree = json!({ "filters": { "status": { "termine": "Fini" } } });
        let existing = entry("filters.status.termine", "Terminé");
        let orphan = entry("nav.menu.home", "Accueil");

        assert_eq!(apply_fills(&mut tree, &[&existing, &orphan]), 0);
        assert_eq!(
            tree,
            json!({ "filters": { "status": { "termine": "Fini" } } })
        );
    }
}
