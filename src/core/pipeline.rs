// ============================================================================
// I18nPrune - 清理流水线
// ============================================================================
//
// 文件: src/core/pipeline.rs
// 职责: 串联 加载 → 展平 → 差集 → 分类 → 删除 → 补齐 → 序列化
// 边界:
//   - ✅ 单棵翻译树的完整清理流程
//   - ✅ 多个语言文件的顺序处理
//   - ✅ 进度日志输出（经 tracing 写到 stderr，不污染 JSON 报告）
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含报告格式化
//
// 处理顺序:
// 1. 读取参考语言和全部目标语言（任一失败则整体失败，不写任何文件）
// 2. 逐个目标语言执行清理
// 3. 非预演模式下写回有变化的文件
//
// ============================================================================

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};

use super::catalog::{catalog_path, discover_targets, load_tree, save_tree, to_canonical_json};
use super::classifier::{KeyClass, KeyClassifier};
use super::diff::extra_keys;
use super::fill::apply_fills;
use super::flatten::{flatten, KeyPath};
use super::pruner::prune;
use crate::models::config::{Config, FillEntry, RulesConfig};
use crate::models::report::{ClassCounts, FileReport, TreeReport};
use crate::tf;

/// 对单棵目标翻译树执行完整清理
pub fn prune_tree(
    reference: &Value,
    target: &mut Value,
    rules: &RulesConfig,
    fills: &[&FillEntry],
) -> crate::error::Result<TreeReport> {
    let size_before = to_canonical_json(target)?.len();

    let extra = extra_keys(&flatten(reference), &flatten(target));
    let classifier = KeyClassifier::new(rules, reference)?
        .with_kept_keys(fills.iter().map(|fill| KeyPath::from_dotted(&fill.key)));
    let classification = classifier.classify_all(&extra);

    let mut classified = ClassCounts::default();
    let mut protected_namespace_flat_keys = 0;
    for key in &classification.deletable {
        match key.class {
            KeyClass::RedundantSection { .. } => classified.redundant_section += 1,
            KeyClass::ArrayArtifact => classified.array_artifact += 1,
            KeyClass::GenericExtra { .. } => classified.generic_extra += 1,
        }
        if classifier.is_flat_protected_namespace_key(&key.path) {
            protected_namespace_flat_keys += 1;
        }
    }

    let outcome = prune(target, &classification.deletable);
    let filled = apply_fills(target, fills);
    let size_after = to_canonical_json(target)?.len();

    Ok(TreeReport {
        extra_keys: extra.len(),
        classified,
        protected_keys: classification
            .protected
            .iter()
            .map(|k| k.to_string())
            .collect(),
        kept_fill_keys: classification.kept.iter().map(|k| k.to_string()).collect(),
        protected_namespace_flat_keys,
        outcome,
        filled,
        size_before,
        size_after,
    })
}

/// 翻译目录清理器
pub struct CatalogPruner {
    /// 翻译目录
    catalog_dir: PathBuf,
    /// 生效配置
    config: Config,
    /// 预演模式：只统计不写回
    dry_run: bool,
}

impl CatalogPruner {
    /// 创建新的清理器
    pub fn new(catalog_dir: PathBuf, config: Config) -> Self {
        Self {
            catalog_dir,
            config,
            dry_run: false,
        }
    }

    /// 设置预演模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 确定目标语言：命令行 > 配置 > 目录扫描
    pub fn resolve_targets(&self, requested: &[String]) -> Result<Vec<String>> {
        let reference = &self.config.catalog.reference;
        let langs = if !requested.is_empty() {
            requested.to_vec()
        } else if !self.config.catalog.targets.is_empty() {
            self.config.catalog.targets.clone()
        } else {
            discover_targets(&self.catalog_dir, reference)?
        };
        Ok(langs.into_iter().filter(|lang| lang != reference).collect())
    }

    /// 处理目标语言，返回每个文件的报告
    pub fn run(&self, requested: &[String]) -> Result<Vec<FileReport>> {
        let reference_lang = &self.config.catalog.reference;
        let reference_path = catalog_path(&self.catalog_dir, reference_lang);
        let reference = load_tree(&reference_path)
            .with_context(|| tf!("error.load_reference", reference_path.display()))?;

        let langs = self.resolve_targets(requested)?;
        info!("{}", tf!("prune.targets", langs.join(", ")));

        let mut targets = Vec::with_capacity(langs.len());
        for lang in langs {
            let path = catalog_path(&self.catalog_dir, &lang);
            let tree = load_tree(&path)
                .with_context(|| tf!("error.load_target", lang))?;
            targets.push((lang, path, tree));
        }

        let mut reports = Vec::with_capacity(targets.len());
        for (lang, path, mut tree) in targets {
            info!("{}", tf!("prune.processing", lang, path.display()));

            let fills = self.config.fills_for(&lang);
            let report = prune_tree(&reference, &mut tree, &self.config.rules, &fills)?;
            debug!(
                lang = %lang,
                extra = report.extra_keys,
                sections = report.outcome.sections_removed.len(),
                removed = report.outcome.total_removed(),
                missing = report.outcome.missing,
                "pruned catalog"
            );

            let written = !self.dry_run && report.has_changes();
            if written {
                save_tree(&path, &tree)?;
            }

            reports.push(FileReport {
                lang,
                path,
                written,
                tree: report,
            });
        }

        Ok(reports)
    }
}
