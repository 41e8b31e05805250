// ============================================================================
// I18nPrune - 键路径展平
// ============================================================================
//
// 文件: src/core/flatten.rs
// 职责: 翻译树到键路径集合的展平与回溯
// 边界:
//   - ✅ 键路径数据结构定义
//   - ✅ 深度优先展平翻译树
//   - ✅ 按键路径回溯叶子节点
//   - ❌ 不应包含差异计算
//   - ❌ 不应包含删除逻辑
//
// ============================================================================

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// 叶子节点在翻译树中的位置
///
/// 以分段形式保存，显示时用 `.` 连接。分段保存保证了即使键名本身
/// 含有 `.` 也能准确回溯到原节点。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyPath(Vec<String>);

/// 翻译树全部叶子键路径的集合
pub type KeySet = BTreeSet<KeyPath>;

impl KeyPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// 按 `.` 拆分点分路径
    pub fn from_dotted(dotted: &str) -> Self {
        Self(dotted.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 顶层命名空间
    pub fn namespace(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// 命名空间下的第一级子部分
    pub fn section(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 展平翻译树，返回所有叶子的键路径
///
/// 非对象值都视为叶子；空对象不产生任何键。
pub fn flatten(tree: &Value) -> KeySet {
    let mut keys = KeySet::new();
    if let Value::Object(_) = tree {
        let mut prefix = Vec::new();
        collect_keys(tree, &mut prefix, &mut keys);
    }
    keys
}

fn collect_keys(value: &Value, prefix: &mut Vec<String>, keys: &mut KeySet) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                prefix.push(key.clone());
                collect_keys(child, prefix, keys);
                prefix.pop();
            }
        }
        _ => {
            keys.insert(KeyPath::new(prefix.clone()));
        }
    }
}

/// 沿键路径回溯到叶子节点
pub fn resolve<'a>(tree: &'a Value, path: &KeyPath) -> Option<&'a Value> {
    let mut node = tree;
    for segment in path.segments() {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}
