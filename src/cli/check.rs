// ============================================================================
// I18nPrune - CLI Check 命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 多余键检查命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 以预演模式调用清理流水线
//   - ✅ 根据结果设置退出码
//   - ❌ 不应写回任何文件
//   - ❌ 不应包含分类和删除逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::CatalogPruner;
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 检查目标语言中的多余键
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// 目标语言（默认使用配置或扫描目录）
    pub langs: Vec<String>,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// 显示详细信息
    #[arg(long)]
    pub detail: bool,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    if args.format != "json" {
        Logger::info(t!("cli.check.start"));
    }

    let catalog_dir = Config::get_catalog_dir();
    if !catalog_dir.exists() {
        anyhow::bail!(tf!("error.catalog_dir_not_exist", catalog_dir.display()));
    }

    let reports = CatalogPruner::new(catalog_dir, Config::snapshot()?)
        .with_dry_run(true)
        .run(&args.langs)?;

    summary::render_reports(&reports, &args.format, args.detail)?;

    if reports.iter().any(|r| r.tree.has_deletable()) {
        std::process::exit(1);
    }

    Ok(())
}
