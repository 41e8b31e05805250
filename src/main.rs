// ============================================================================
// I18nPrune - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 程序启动和顶层错误输出
// 边界:
//   - ✅ 调用 CLI 路由
//   - ✅ 顶层错误输出和退出码
//   - ❌ 不应包含命令实现
//
// ============================================================================

use i18n_prune::cli;
use i18n_prune::utils::logger::Logger;

fn main() {
    if let Err(e) = cli::run_cli() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
