// ============================================================================
// I18nPrune - 多余键分类器
// ============================================================================
//
// 文件: src/core/classifier.rs
// 职责: 按优先级规则为多余键分类
// 边界:
//   - ✅ 受保护键识别
//   - ✅ 冗余子部分 / 数组展平键 / 普通多余键分类
//   - ✅ 受保护命名空间扁平键识别
//   - ✅ 补齐键保留（配置中的补齐键不参与删除）
//   - ❌ 不应修改翻译树
//   - ❌ 不应包含输出逻辑
//
// 规则优先级:
// 1. 命名空间属于冗余命名空间，且子部分不在参考语言中 → 冗余子部分
// 2. 末段形如 name[index] → 数组展平键
// 3. 其余 → 普通多余键（按顶层命名空间分组）
//
// ============================================================================

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap, HashSet};

use super::flatten::{KeyPath, KeySet};
use crate::error::Result;
use crate::models::config::RulesConfig;

/// 数组被展平为对象键的形式，如 `keywords[1]`
const ARRAY_INDEX_PATTERN: &str = r"^\w+\[\d+\]$";

/// 多余键的分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyClass {
    /// 参考语言中不存在的整个子部分
    RedundantSection { namespace: String, section: String },
    /// 数组展平残留
    ArrayArtifact,
    /// 普通多余键
    GenericExtra { namespace: String },
}

/// 已分类的多余键
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedKey {
    pub path: KeyPath,
    pub class: KeyClass,
}

/// 一次分类的结果
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// 待删除的键
    pub deletable: Vec<ClassifiedKey>,
    /// 命中保护规则而保留的键
    pub protected: Vec<KeyPath>,
    /// 属于补齐配置而保留的键
    pub kept: Vec<KeyPath>,
}

impl Classification {
    /// 去重后的冗余子部分
    pub fn redundant_sections(&self) -> BTreeSet<(&str, &str)> {
        self.deletable
            .iter()
            .filter_map(|key| match &key.class {
                KeyClass::RedundantSection { namespace, section } => {
                    Some((namespace.as_str(), section.as_str()))
                }
                _ => None,
            })
            .collect()
    }
}

/// 多余键分类器
pub struct KeyClassifier<'a> {
    rules: &'a RulesConfig,
    /// 参考语言中各冗余命名空间下的子部分
    reference_sections: HashMap<&'a str, HashSet<String>>,
    array_index: Regex,
    /// 本语言补齐配置写入的键
    kept: HashSet<KeyPath>,
}

impl<'a> KeyClassifier<'a> {
    /// 基于参考翻译树创建分类器
    pub fn new(rules: &'a RulesConfig, reference: &Value) -> Result<Self> {
        let reference_sections: HashMap<&str, HashSet<String>> = rules
            .redundant_namespaces
            .iter()
            .map(|namespace| {
                let sections = reference
                    .get(namespace)
                    .and_then(Value::as_object)
                    .map(|map| map.keys().cloned().collect::<HashSet<String>>())
                    .unwrap_or_default();
                (namespace.as_str(), sections)
            })
            .collect();

        Ok(Self {
            rules,
            reference_sections,
            array_index: Regex::new(ARRAY_INDEX_PATTERN)?,
            kept: HashSet::new(),
        })
    }

    /// 登记补齐键，使补齐与清理互不抵消
    pub fn with_kept_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = KeyPath>,
    {
        self.kept.extend(keys);
        self
    }

    /// 位于受保护子部分下的键永不删除
    pub fn is_protected(&self, path: &KeyPath) -> bool {
        path.namespace() == Some(self.rules.protected_namespace.as_str())
            && path
                .section()
                .map_or(false, |s| self.rules.protected_sections.iter().any(|p| p == s))
    }

    /// 受保护命名空间下的扁平键：`errors.x` 或 `errors.<数字>.x`
    pub fn is_flat_protected_namespace_key(&self, path: &KeyPath) -> bool {
        if path.namespace() != Some(self.rules.protected_namespace.as_str()) {
            return false;
        }
        match path.segments() {
            [_, _] => true,
            [_, index, _] => !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// 为单个键分类
    pub fn classify(&self, path: &KeyPath) -> KeyClass {
        if let (Some(namespace), Some(section)) = (path.namespace(), path.section()) {
            if let Some(sections) = self.reference_sections.get(namespace) {
                if !sections.contains(section) {
                    return KeyClass::RedundantSection {
                        namespace: namespace.to_string(),
                        section: section.to_string(),
                    };
                }
            }
        }

        if path.leaf().map_or(false, |leaf| self.array_index.is_match(leaf)) {
            return KeyClass::ArrayArtifact;
        }

        KeyClass::GenericExtra {
            namespace: path.namespace().unwrap_or_default().to_string(),
        }
    }

    /// 为全部多余键分类，受保护的键和补齐键单独列出
    pub fn classify_all(&self, extra: &KeySet) -> Classification {
        let mut classification = Classification::default();
        for path in extra {
            if self.is_protected(path) {
                classification.protected.push(path.clone());
            } else if self.kept.contains(path) {
                classification.kept.push(path.clone());
            } else {
                classification.deletable.push(ClassifiedKey {
                    path: path.clone(),
                    class: self.classify(path),
                });
            }
        }
        classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(dotted: &str) -> KeyPath {
        KeyPath::from_dotted(dotted)
    }

    fn reference() -> Value {
        json!({
            "market": { "summary": { "title": "Markets" } },
            "errors": { "generic": "Something went wrong" }
        })
    }

    #[test]
    fn section_missing_from_reference_is_redundant() {
        let rules = RulesConfig::default();
        let reference = reference();
        let classifier = KeyClassifier::new(&rules, &reference).unwrap();

        assert_eq!(
            classifier.classify(&key("market.details.tabs[0]")),
            KeyClass::RedundantSection {
                namespace: "market".to_string(),
                section: "details".to_string()
            }
        );
    }

    #[test]
    fn known_section_falls_through_to_later_rules() {
        let rules = RulesConfig::default();
        let reference = reference();
        let classifier = KeyClassifier::new(&rules, &reference).unwrap();

        assert_eq!(
            classifier.classify(&key("market.summary.keywords[1]")),
            KeyClass::ArrayArtifact
        );
        assert_eq!(
            classifier.classify(&key("market.summary.subtitle")),
            KeyClass::GenericExtra {
                namespace: "market".to_string()
            }
        );
    }

    #[test]
    fn top_level_namespace_leaf_is_not_a_section() {
        let rules = RulesConfig::default();
        let reference = json!({});
        let classifier = KeyClassifier::new(&rules, &reference).unwrap();

        assert_eq!(
            classifier.classify(&key("market")),
            KeyClass::GenericExtra {
                namespace: "market".to_string()
            }
        );
    }

    #[test]
    fn array_index_pattern_matches_only_whole_segment() {
        let rules = RulesConfig::default();
        let reference = reference();
        let classifier = KeyClassifier::new(&rules, &reference).unwrap();

        assert_eq!(classifier.classify(&key("d[0]")), KeyClass::ArrayArtifact);
        assert_eq!(
            classifier.classify(&key("seo.keywords[12]")),
            KeyClass::ArrayArtifact
        );
        for generic in ["seo.keywords[]", "seo.keywords[a]", "seo.[1]", "seo.k[1]x"] {
            assert!(
                matches!(classifier.classify(&key(generic)), KeyClass::GenericExtra { .. }),
                "{} should be generic",
                generic
            );
        }
    }

    #[test]
    fn protected_sections_are_never_deletable() {
        let rules = RulesConfig::default();
        let reference = reference();
        let classifier = KeyClassifier::new(&rules, &reference).unwrap();

        let extra: KeySet = [
            "errors.wallet.rejected",
            "errors.api",
            "errors.network.timeout[0]",
            "errors.unused",
            "wallet.connect",
        ]
        .iter()
        .map(|k| key(k))
        .collect();

        let classification = classifier.classify_all(&extra);
        let protected: Vec<String> = classification
            .protected
            .iter()
            .map(|k| k.to_string())
            .collect();
        let deletable: Vec<String> = classification
            .deletable
            .iter()
            .map(|k| k.path.to_string())
            .collect();

        assert_eq!(
            protected,
            vec!["errors.api", "errors.network.timeout[0]", "errors.wallet.rejected"]
        );
        assert_eq!(deletable, vec!["errors.unused", "wallet.connect"]);
    }

    #[test]
    fn every_extra_key_gets_exactly_one_outcome() {
        let rules = RulesConfig::default();
        let reference = reference();
        let classifier = KeyClassifier::new(&rules, &reference).unwrap();

        let extra: KeySet = [
            "market.details.title",
            "market.details.tags[0]",
            "a.c",
            "d[0]",
            "errors.business.limit",
        ]
        .iter()
        .map(|k| key(k))
        .collect();

        let classification = classifier.classify_all(&extra);
        assert_eq!(
            classification.deletable.len()
                + classification.protected.len()
                + classification.kept.len(),
            extra.len()
        );
        assert_eq!(
            classification.redundant_sections().into_iter().collect::<Vec<_>>(),
            vec![("market", "details")]
        );
    }

    #[test]
    fn fill_keys_are_kept_not_deleted() {
        let rules = RulesConfig::default();
        let reference = json!({ "filters": { "status": { "active": "Active" } } });
        let classifier = KeyClassifier::new(&rules, &reference)
            .unwrap()
            .with_kept_keys(vec![key("filters.status.termine")]);

        let extra: KeySet = ["filters.status.termine", "filters.status.stale"]
            .iter()
            .map(|k| key(k))
            .collect();

        let classification = classifier.classify_all(&extra);
        assert_eq!(classification.kept, vec![key("filters.status.termine")]);
        assert_eq!(classification.deletable.len(), 1);
        assert_eq!(classification.deletable[0].path, key("filters.status.stale"));
        assert!(classification.protected.is_empty());
    }

    #[test]
    fn flat_keys_of_protected_namespace() {
        let rules = RulesConfig::default();
        let reference = reference();
        let classifier = KeyClassifier::new(&rules, &reference).unwrap();

        assert!(classifier.is_flat_protected_namespace_key(&key("errors.timeout")));
        assert!(classifier.is_flat_protected_namespace_key(&key("errors.3.message")));
        assert!(!classifier.is_flat_protected_namespace_key(&key("errors.form.required")));
        assert!(!classifier.is_flat_protected_namespace_key(&key("common.timeout")));
    }

    #[test]
    fn custom_redundant_namespaces() {
        let rules = RulesConfig {
            redundant_namespaces: vec!["market".to_string(), "portfolio".to_string()],
            ..RulesConfig::default()
        };
        let reference = json!({ "portfolio": { "overview": { "title": "Overview" } } });
        let classifier = KeyClassifier::new(&rules, &reference).unwrap();

        assert_eq!(
            classifier.classify(&key("portfolio.legacy.title")),
            KeyClass::RedundantSection {
                namespace: "portfolio".to_string(),
                section: "legacy".to_string()
            }
        );
        assert!(matches!(
            classifier.classify(&key("portfolio.overview.subtitle")),
            KeyClass::GenericExtra { .. }
        ));
    }
}
