// ============================================================================
// I18nPrune - CLI Prune 命令
// ============================================================================
//
// 文件: src/cli/prune.rs
// 职责: 多余键清理命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用清理流水线并写回文件
//   - ✅ 清理结果格式化输出
//   - ❌ 不应包含分类和删除逻辑
//   - ❌ 不应包含文件读写细节
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::core::CatalogPruner;
use crate::models::config::Config;
use crate::models::report::RunTotals;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 清理目标语言中的多余键
#[derive(Debug, Args)]
pub struct PruneArgs {
    /// 目标语言（默认使用配置或扫描目录）
    pub langs: Vec<String>,

    /// 只统计，不写回文件（预演模式）
    #[arg(long)]
    pub dry_run: bool,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// 显示详细信息
    #[arg(long)]
    pub detail: bool,
}

pub fn handle_prune(args: PruneArgs) -> Result<()> {
    let table = args.format != "json";
    if table {
        Logger::info(t!("cli.prune.start"));
    }

    let catalog_dir = Config::get_catalog_dir();
    if !catalog_dir.exists() {
        anyhow::bail!(tf!("error.catalog_dir_not_exist", catalog_dir.display()));
    }

    let reports = CatalogPruner::new(catalog_dir, Config::snapshot()?)
        .with_dry_run(args.dry_run)
        .run(&args.langs)?;

    summary::render_reports(&reports, &args.format, args.detail)?;

    if table {
        if args.dry_run {
            Logger::info(t!("prune.dry_run_complete"));
        } else {
            let totals = RunTotals::from_reports(&reports);
            Logger::success(tf!("prune.completed", totals.files_changed));
        }
    }

    Ok(())
}
