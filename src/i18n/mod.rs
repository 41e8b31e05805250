// ============================================================================
// I18nPrune - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 控制台输出的国际化支持
// 边界:
//   - ✅ 翻译表选择和查找
//   - ✅ 翻译宏定义和实现
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

/// 获取翻译文本
pub fn get_translation(key: &str) -> String {
    // 每次都从配置获取语言设置
    let language = get_language_from_config().unwrap_or_else(|| "en_us".to_string());
    lookup(&language, key)
}

/// 在指定语言的翻译表中查找，未知语言回退到英文
pub fn lookup(language: &str, key: &str) -> String {
    let translation_data = match language {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS,
    };

    translation_data
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 从配置获取语言设置
fn get_language_from_config() -> Option<String> {
    use crate::models::config::Config;

    // 配置未初始化时返回 None
    Config::get_language().ok()
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 带参数翻译的辅助函数
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    let mut cursor = 0;
    for arg in args.iter() {
        // 替换下一个 {} 占位符，跳过已插入的参数
        match result[cursor..].find("{}") {
            Some(offset) => {
                let pos = cursor + offset;
                result.replace_range(pos..pos + 2, arg);
                cursor = pos + arg.len();
            }
            None => break,
        }
    }
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(table: &[(&str, &str)]) -> Vec<String> {
        let mut keys: Vec<String> = table.iter().map(|(k, _)| k.to_string()).collect();
        keys.sort();
        keys
    }

    #[test]
    fn tables_cover_the_same_keys() {
        assert_eq!(keys(en_us::TRANSLATIONS), keys(zh_cn::TRANSLATIONS));
    }

    #[test]
    fn placeholder_counts_match_between_languages() {
        for (key, en) in en_us::TRANSLATIONS {
            let zh = lookup("zh_cn", key);
            assert_eq!(en.matches("{}").count(), zh.matches("{}").count(), "{}", key);
        }
    }

    #[test]
    fn arguments_fill_placeholders_in_order() {
        let text = format_with_args(
            "{} {}: {} extra keys removed".to_string(),
            vec!["✗".to_string(), "{}".to_string(), "3".to_string()],
        );
        assert_eq!(text, "✗ {}: 3 extra keys removed");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(lookup("fr", "summary.all_clean"), "All catalogs are clean");
        assert!(lookup("en_us", "no.such.key").starts_with("Unknown translation key"));
    }
}
