// ============================================================================
// I18nPrune - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数合并
//   - ❌ 不应包含清理规则的执行
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "i18n-prune.toml";

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// I18nPrune 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 翻译目录配置
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// 清理规则
    #[serde(default)]
    pub rules: RulesConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
    /// 清理后补齐的翻译
    #[serde(default)]
    pub fill: Vec<FillEntry>,
}

/// 翻译目录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 存放 <lang>.json 的目录
    #[serde(default = "Config::default_catalog_dir")]
    pub dir: String,
    /// 参考语言
    #[serde(default = "Config::default_reference")]
    pub reference: String,
    /// 目标语言，为空时扫描目录下除参考语言外的所有 json 文件
    #[serde(default)]
    pub targets: Vec<String>,
}

/// 清理规则配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// 按整段删除多余子部分的命名空间
    #[serde(default = "Config::default_redundant_namespaces")]
    pub redundant_namespaces: Vec<String>,
    /// 受保护的命名空间
    #[serde(default = "Config::default_protected_namespace")]
    pub protected_namespace: String,
    /// 受保护命名空间下永不删除的子部分
    #[serde(default = "Config::default_protected_sections")]
    pub protected_sections: Vec<String>,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// 补齐条目：目标语言缺失该叶子且父节点存在时写入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillEntry {
    /// 目标语言
    pub lang: String,
    /// 点分键路径
    pub key: String,
    /// 写入的翻译
    pub value: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub catalog_dir: Option<String>,
    pub language: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    fn default_catalog_dir() -> String {
        "messages".to_string()
    }

    fn default_reference() -> String {
        "en".to_string()
    }

    fn default_redundant_namespaces() -> Vec<String> {
        vec!["market".to_string()]
    }

    fn default_protected_namespace() -> String {
        "errors".to_string()
    }

    fn default_protected_sections() -> Vec<String> {
        ["wallet", "api", "network", "business"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize(config_path: &Path) -> anyhow::Result<()> {
        let config = Self::load_config(config_path)?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件，不存在时使用默认配置
    pub fn load_config(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply_runtime_args(args);
        Ok(())
    }

    fn apply_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(dir) = args.catalog_dir {
            self.catalog.dir = dir;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板
    pub fn generate_default_template() -> Self {
        let mut config = Self::default();
        config.catalog.targets = ["es", "fr", "ko", "zh-CN"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        config.fill = vec![FillEntry {
            lang: "fr".to_string(),
            key: "filters.status.termine".to_string(),
            value: "Terminé".to_string(),
        }];
        config
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::generate_default_template().save_to_file(config_path)
    }

    /// 读取全局配置的快照
    fn read<T>(f: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(f(&config))
    }

    /// 获取当前配置的完整副本
    pub fn snapshot() -> anyhow::Result<Config> {
        Self::read(Config::clone)
    }

    /// 获取翻译目录（带默认值）
    pub fn get_catalog_dir() -> PathBuf {
        Self::read(|c| PathBuf::from(&c.catalog.dir))
            .unwrap_or_else(|_| PathBuf::from(Self::default_catalog_dir()))
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Self::read(|c| c.i18n.language.clone())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::read(|c| c.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        Self::read(|c| c.output.colored).unwrap_or_else(|_| Self::default_colored())
    }

    /// 某个目标语言适用的补齐条目
    pub fn fills_for<'a>(&'a self, lang: &str) -> Vec<&'a FillEntry> {
        self.fill.iter().filter(|f| f.lang == lang).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            rules: RulesConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
            fill: Vec::new(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: Config::default_catalog_dir(),
            reference: Config::default_reference(),
            targets: Vec::new(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            redundant_namespaces: Config::default_redundant_namespaces(),
            protected_namespace: Config::default_protected_namespace(),
            protected_sections: Config::default_protected_sections(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
