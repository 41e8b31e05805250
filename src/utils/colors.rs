// ============================================================================
// I18nPrune - 颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 终端颜色输出和颜色开关管理
// 边界:
//   - ✅ 颜色输出格式化
//   - ✅ 主题颜色管理
//   - ✅ 颜色兼容性处理（非终端输出时关闭）
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文本内容处理
//
// ============================================================================

use colored::Colorize;

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 根据配置和终端能力开关颜色输出
    pub fn configure(enabled: bool) {
        let is_terminal = atty::is(atty::Stream::Stdout);
        colored::control::set_override(enabled && is_terminal);
    }

    /// 信息颜色 (青色)
    pub fn info(text: &str) -> String {
        text.cyan().to_string()
    }

    /// 警告颜色 (黄色)
    pub fn warn(text: &str) -> String {
        text.yellow().to_string()
    }

    /// 错误颜色 (红色)
    pub fn error(text: &str) -> String {
        text.red().to_string()
    }

    /// 成功颜色 (绿色)
    pub fn success(text: &str) -> String {
        text.green().to_string()
    }

    /// 次要信息 (灰色)
    pub fn dim(text: &str) -> String {
        text.bright_black().to_string()
    }

    /// 粗体
    pub fn bold(text: &str) -> String {
        text.bold().to_string()
    }
}
