// ============================================================================
// I18nPrune - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "I18N-PRUNE";

/// 控制台日志前缀
pub const LOG_PREFIX: &str = "[PRUNE]";

/// 分隔线
pub const RULE: &str = "───────────────────────────────────────";

/// 像素风格图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 删除图标
    pub const REMOVE: &str = "✗";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 文件图标
    pub const FILE: &str = "●";
    /// 分类图标
    pub const CLASS: &str = "▪";
    /// 保护图标
    pub const SHIELD: &str = "◆";
    /// 补齐图标
    pub const FILL: &str = "▲";
    /// 箭头图标
    pub const ARROW: &str = "→";
    /// 汇总图标
    pub const SUMMARY: &str = "◈";
    /// 跳过图标
    pub const SKIP: &str = "○";
}
