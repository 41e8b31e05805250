// ============================================================================
// I18nPrune - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 日志输出和格式化工具
// 边界:
//   - ✅ 控制台输出（带颜色前缀）
//   - ✅ tracing 订阅器初始化
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//   - ❌ 不应包含日志内容生成
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use super::colors::Colors;
use super::constants::LOG_PREFIX;

/// 简单的日志工具
pub struct Logger;

impl Logger {
    /// 初始化诊断日志，RUST_LOG 优先，否则按 verbose 选择级别
    pub fn init_tracing(verbose: bool, colored: bool) {
        let default_level = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(Self::stderr_ansi(colored, atty::is(atty::Stream::Stderr)))
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// stderr 诊断日志是否输出 ANSI 转义：与 --no-color 一致，且仅限终端
    pub fn stderr_ansi(colored: bool, stderr_is_terminal: bool) -> bool {
        colored && stderr_is_terminal
    }

    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::info(LOG_PREFIX), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::warn("[WARN]"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Colors::error("[ERROR]"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Colors::success(LOG_PREFIX), msg.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_disables_ansi_in_diagnostics() {
        assert!(!Logger::stderr_ansi(false, true));
        assert!(!Logger::stderr_ansi(true, false));
        assert!(Logger::stderr_ansi(true, true));
    }
}
