// ============================================================================
// I18nPrune - 多余键删除
// ============================================================================
//
// 文件: src/core/pruner.rs
// 职责: 按分类结果从目标翻译树中删除多余键
// 边界:
//   - ✅ 冗余子部分整段删除
//   - ✅ 数组展平键 / 普通多余键逐个删除
//   - ✅ 已不存在路径的计数
//   - ❌ 不应包含分类逻辑
//   - ❌ 不应包含文件读写
//
// ============================================================================

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use super::classifier::{ClassifiedKey, KeyClass};

/// 被整段删除的冗余子部分
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedSection {
    pub namespace: String,
    pub section: String,
    /// 子部分紧凑 JSON 编码的字节数
    pub bytes: usize,
}

/// 一次删除的结果统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneOutcome {
    /// 整段删除的子部分
    pub sections_removed: Vec<RemovedSection>,
    /// 删除的数组展平键数量
    pub array_artifacts_removed: usize,
    /// 各命名空间删除的普通多余键数量
    pub generic_removed: BTreeMap<String, usize>,
    /// 删除时路径已不存在的数量
    pub missing: usize,
}

impl PruneOutcome {
    /// 删除的条目总数（子部分按一个计）
    pub fn total_removed(&self) -> usize {
        self.sections_removed.len()
            + self.array_artifacts_removed
            + self.generic_removed.values().sum::<usize>()
    }
}

/// 沿路径删除节点，返回被删除的值
///
/// 中间节点缺失时放弃该路径，返回 None。
pub fn remove_path(tree: &mut Value, segments: &[String]) -> Option<Value> {
    let (last, parents) = segments.split_last()?;
    let mut node = tree;
    for segment in parents {
        node = node.as_object_mut()?.get_mut(segment)?;
    }
    node.as_object_mut()?.shift_remove(last)
}

/// 按分类结果删除多余键
pub fn prune(tree: &mut Value, keys: &[ClassifiedKey]) -> PruneOutcome {
    let mut outcome = PruneOutcome::default();
    let mut seen_sections: Vec<(&str, &str)> = Vec::new();

    for key in keys {
        match &key.class {
            KeyClass::RedundantSection { namespace, section } => {
                let id = (namespace.as_str(), section.as_str());
                if seen_sections.contains(&id) {
                    continue;
                }
                seen_sections.push(id);

                let route = [namespace.clone(), section.clone()];
                match remove_path(tree, &route) {
                    Some(removed) => outcome.sections_removed.push(RemovedSection {
                        namespace: namespace.clone(),
                        section: section.clone(),
                        bytes: compact_len(&removed),
                    }),
                    None => {
                        debug!(section = %route.join("."), "redundant section already absent");
                        outcome.missing += 1;
                    }
                }
            }
            KeyClass::ArrayArtifact => {
                if remove_path(tree, key.path.segments()).is_some() {
                    outcome.array_artifacts_removed += 1;
                } else {
                    debug!(key = %key.path, "array artifact already absent");
                    outcome.missing += 1;
                }
            }
            KeyClass::GenericExtra { namespace } => {
                if remove_path(tree, key.path.segments()).is_some() {
                    *outcome.generic_removed.entry(namespace.clone()).or_default() += 1;
                } else {
                    debug!(key = %key.path, "extra key already absent");
                    outcome.missing += 1;
                }
            }
        }
    }

    outcome
}

fn compact_len(value: &Value) -> usize {
    serde_json::to_string(value).map(|s| s.len()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flatten::KeyPath;
    use serde_json::json;

    fn classified(dotted: &str, class: KeyClass) -> ClassifiedKey {
        ClassifiedKey {
            path: KeyPath::from_dotted(dotted),
            class,
        }
    }

    fn generic(dotted: &str) -> ClassifiedKey {
        let namespace = dotted.split('.').next().unwrap_or_default().to_string();
        classified(dotted, KeyClass::GenericExtra { namespace })
    }

    #[test]
    fn removes_whole_section_once() {
        let mut tree = json!({
            "market": {
                "summary": { "title": "Marchés" },
                "details": { "title": "Détails", "tabs[0]": "Aperçu" }
            }
        });
        let section = KeyClass::RedundantSection {
            namespace: "market".to_string(),
            section: "details".to_string(),
        };
        let keys = vec![
            classified("market.details.title", section.clone()),
            classified("market.details.tabs[0]", section),
        ];

        let outcome = prune(&mut tree, &keys);

        assert_eq!(tree, json!({ "market": { "summary": { "title": "Marchés" } } }));
        assert_eq!(outcome.sections_removed.len(), 1);
        assert_eq!(outcome.sections_removed[0].section, "details");
        assert!(outcome.sections_removed[0].bytes > 0);
        assert_eq!(outcome.missing, 0);
        assert_eq!(outcome.total_removed(), 1);
    }

    #[test]
    fn removes_single_leaves_and_groups_by_namespace() {
        let mut tree = json!({
            "a": { "b": "y", "c": "z" },
            "d[0]": "w",
            "errors": { "old": "x", "older": "y" }
        });
        let keys = vec![
            generic("a.c"),
            classified("d[0]", KeyClass::ArrayArtifact),
            generic("errors.old"),
            generic("errors.older"),
        ];

        let outcome = prune(&mut tree, &keys);

        assert_eq!(tree, json!({ "a": { "b": "y" }, "errors": {} }));
        assert_eq!(outcome.array_artifacts_removed, 1);
        assert_eq!(outcome.generic_removed.get("a"), Some(&1));
        assert_eq!(outcome.generic_removed.get("errors"), Some(&2));
        assert_eq!(outcome.total_removed(), 4);
    }

    #[test]
    fn missing_paths_are_counted_not_failed() {
        let mut tree = json!({ "a": { "b": "y" }, "s": "leaf" });
        let keys = vec![generic("x.y.z"), generic("a.gone"), generic("s.under_leaf")];

        let outcome = prune(&mut tree, &keys);

        assert_eq!(tree, json!({ "a": { "b": "y" }, "s": "leaf" }));
        assert_eq!(outcome.missing, 3);
        assert_eq!(outcome.total_removed(), 0);
    }

    #[test]
    fn deletion_is_idempotent() {
        let mut tree = json!({ "a": { "b": "y", "c": "z" } });
        let keys = vec![generic("a.c")];

        prune(&mut tree, &keys);
        let second = prune(&mut tree, &keys);

        assert_eq!(tree, json!({ "a": { "b": "y" } }));
        assert_eq!(second.total_removed(), 0);
        assert_eq!(second.missing, 1);
    }

    #[test]
    fn removal_keeps_sibling_order() {
        let mut tree = json!({ "z": "1", "drop": "2", "a": "3", "m": "4" });
        remove_path(&mut tree, &["drop".to_string()]);

        let order: Vec<&String> = tree.as_object().unwrap().keys().collect();
        assert_eq!(order, ["z", "a", "m"]);
    }
}
