// ============================================================================
// I18nPrune - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 配置初始化和运行时参数合并
//   - ✅ 命令路由分发
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含清理规则
//
// ============================================================================

pub mod check;
pub mod init;
pub mod prune;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::config::{Config, RuntimeArgs, DEFAULT_CONFIG_FILE};
use crate::utils::colors::Colors;
use crate::utils::logger::Logger;
use check::{handle_check, CheckArgs};
use init::{handle_init, InitArgs};
use prune::{handle_prune, PruneArgs};

/// I18nPrune - Remove keys that only exist in translated catalogs
#[derive(Debug, Parser)]
#[command(name = "i18n-prune")]
#[command(about = "Remove translation keys that are missing from the reference language")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory holding <lang>.json catalogs
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report extra keys without modifying any file
    Check(CheckArgs),
    /// Remove extra keys and rewrite target catalogs
    Prune(PruneArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    Config::initialize(&cli.config)?;
    // Build runtime args to override config
    Config::merge_runtime_args(build_runtime_args(&cli))?;

    Logger::init_tracing(Config::get_verbose(), Config::get_colored());
    Colors::configure(Config::get_colored());

    match cli.command {
        Commands::Check(args) => handle_check(args),
        Commands::Prune(args) => handle_prune(args),
        Commands::Init(args) => handle_init(args, &cli.config),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        catalog_dir: cli.dir.clone(),
        language: cli.language.clone(),
    }
}
