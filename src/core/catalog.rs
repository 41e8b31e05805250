// ============================================================================
// I18nPrune - 翻译文件读写
// ============================================================================
//
// 文件: src/core/catalog.rs
// 职责: 翻译文件的加载、规范化序列化、写回与发现
// 边界:
//   - ✅ JSON 翻译文件读取与校验
//   - ✅ 规范化编码（2 空格缩进，非 ASCII 原样保留）
//   - ✅ 目录下目标语言文件发现
//   - ❌ 不应包含键比较和删除逻辑
//   - ❌ 不应包含输出格式化
//
// ============================================================================

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

/// 语言文件路径：<dir>/<lang>.json
pub fn catalog_path(dir: &Path, lang: &str) -> PathBuf {
    dir.join(format!("{}.json", lang))
}

/// 读取翻译文件，顶层必须是对象
pub fn load_tree(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| CatalogError::read(path, e))?;
    let tree: Value = serde_json::from_str(&content).map_err(|e| CatalogError::parse(path, e))?;
    if !tree.is_object() {
        return Err(CatalogError::NotAnObject {
            path: path.to_path_buf(),
        });
    }
    Ok(tree)
}

/// 规范化编码
///
/// serde_json 的 pretty 输出为 2 空格缩进，且不转义非 ASCII 字符。
pub fn to_canonical_json(tree: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// 以规范化编码写回翻译文件
pub fn save_tree(path: &Path, tree: &Value) -> Result<()> {
    let content = to_canonical_json(tree)?;
    fs::write(path, content).map_err(|e| CatalogError::write(path, e))
}

/// 列出目录下除参考语言外的所有语言
///
/// 目录名中的 `[`、`*`、`?` 按字面匹配，不可读的条目直接报错。
pub fn discover_targets(dir: &Path, reference: &str) -> Result<Vec<String>> {
    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped_dir).join("*.json");

    let mut langs = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if let Some(lang) = path.file_stem().and_then(|stem| stem.to_str()) {
            if lang != reference {
                langs.push(lang.to_string());
            }
        }
    }
    langs.sort();
    Ok(langs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn canonical_json_keeps_non_ascii_and_two_space_indent() {
        let tree = json!({ "title": "市场", "nested": { "ok": "Terminé" } });
        let text = to_canonical_json(&tree).unwrap();

        assert_eq!(
            text,
            "{\n  \"title\": \"市场\",\n  \"nested\": {\n    \"ok\": \"Terminé\"\n  }\n}"
        );
    }

    #[test]
    fn load_and_save_preserve_key_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fr.json");
        fs::write(&path, r#"{"z": "1", "a": {"y": "2", "b": "3"}}"#).unwrap();

        let tree = load_tree(&path).unwrap();
        save_tree(&path, &tree).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let z = written.find("\"z\"").unwrap();
        let a = written.find("\"a\"").unwrap();
        let y = written.find("\"y\"").unwrap();
        let b = written.find("\"b\"").unwrap();
        assert!(z < a && y < b);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_tree(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"a\": ").unwrap();

        let err = load_tree(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn array_root_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.json");
        fs::write(&path, "[1, 2]").unwrap();

        assert!(matches!(
            load_tree(&path).unwrap_err(),
            CatalogError::NotAnObject { .. }
        ));
    }

    #[test]
    fn discovers_every_language_but_reference() {
        let dir = TempDir::new().unwrap();
        for lang in ["en", "fr", "zh-CN", "es"] {
            fs::write(catalog_path(dir.path(), lang), "{}").unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let langs = discover_targets(dir.path(), "en").unwrap();
        assert_eq!(langs, vec!["es", "fr", "zh-CN"]);
    }

    #[test]
    fn directory_names_with_glob_metacharacters_match_literally() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("msgs[1]");
        let lookalike = root.path().join("msgs1");
        fs::create_dir(&dir).unwrap();
        fs::create_dir(&lookalike).unwrap();
        for lang in ["en", "fr", "ko"] {
            fs::write(catalog_path(&dir, lang), "{}").unwrap();
        }
        fs::write(catalog_path(&lookalike, "de"), "{}").unwrap();

        let langs = discover_targets(&dir, "en").unwrap();
        assert_eq!(langs, vec!["fr", "ko"]);
    }
}
