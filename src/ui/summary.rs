// ============================================================================
// I18nPrune - 清理结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 清理报告的表格与 JSON 输出
// 边界:
//   - ✅ 单文件报告表格显示
//   - ✅ 运行汇总显示
//   - ✅ JSON 格式输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含清理逻辑
//   - ❌ 不应包含文件操作
//
// ============================================================================

use anyhow::Result;

use crate::models::report::{FileReport, RunTotals};
use crate::utils::colors::Colors;
use crate::utils::constants::{icons, APP_NAME, RULE};
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 按格式输出全部报告
pub fn render_reports(reports: &[FileReport], format: &str, detail: bool) -> Result<()> {
    match format {
        "json" => println!("{}", json_report(reports)?),
        _ => {
            for report in reports {
                print_file_report(report, detail);
            }
            print_run_totals(&RunTotals::from_reports(reports));
        }
    }
    Ok(())
}

/// JSON 报告：stdout 上唯一的输出，进度日志走 stderr
pub fn json_report(reports: &[FileReport]) -> Result<String> {
    let json_output = serde_json::json!({
        "files": reports,
        "totals": RunTotals::from_reports(reports),
    });
    Ok(serde_json::to_string_pretty(&json_output)?)
}

/// 打印单个文件的报告
pub fn print_file_report(report: &FileReport, detail: bool) {
    let tree = &report.tree;

    Logger::info("");
    Logger::info(tf!(
        "summary.file_header",
        icons::FILE,
        Colors::bold(&report.lang),
        report.path.display()
    ));
    Logger::info(RULE);

    if !tree.has_deletable() && tree.filled == 0 {
        Logger::success(tf!("summary.nothing_to_do", icons::SUCCESS));
        print_protected(report, detail);
        return;
    }

    Logger::info(tf!("summary.extra_keys", tree.extra_keys));
    Logger::info(tf!(
        "summary.classified",
        icons::CLASS,
        tree.classified.redundant_section,
        tree.classified.array_artifact,
        tree.classified.generic_extra
    ));

    let outcome = &tree.outcome;
    if !outcome.sections_removed.is_empty() {
        let bytes: usize = outcome.sections_removed.iter().map(|s| s.bytes).sum();
        Logger::info(tf!(
            "summary.sections_removed",
            icons::REMOVE,
            outcome.sections_removed.len(),
            bytes
        ));
        if detail {
            for section in &outcome.sections_removed {
                Logger::info(tf!(
                    "summary.section_detail",
                    Colors::info(&format!("{}.{}", section.namespace, section.section)),
                    section.bytes
                ));
            }
        }
    }

    if outcome.array_artifacts_removed > 0 {
        Logger::info(tf!(
            "summary.array_removed",
            icons::REMOVE,
            outcome.array_artifacts_removed
        ));
    }

    for (namespace, count) in &outcome.generic_removed {
        Logger::info(tf!(
            "summary.generic_removed",
            icons::REMOVE,
            Colors::info(namespace),
            count
        ));
    }

    if tree.protected_namespace_flat_keys > 0 {
        Logger::info(tf!(
            "summary.flat_keys",
            icons::CLASS,
            tree.protected_namespace_flat_keys
        ));
    }

    if outcome.missing > 0 {
        Logger::warn(tf!("summary.missing", icons::WARNING, outcome.missing));
    }

    if tree.filled > 0 {
        Logger::info(tf!("summary.filled", icons::FILL, tree.filled));
    }

    print_protected(report, detail);

    Logger::info(tf!("summary.keys_removed", outcome.total_removed()));
    Logger::info(tf!(
        "summary.size",
        tree.size_before,
        icons::ARROW,
        tree.size_after,
        tree.saved_bytes()
    ));

    if report.written {
        Logger::success(tf!("summary.written", icons::SUCCESS, report.path.display()));
    } else if tree.has_changes() {
        Logger::info(tf!("summary.not_written", icons::SKIP));
    }
}

/// 打印受保护或属于补齐配置而保留的键
fn print_protected(report: &FileReport, detail: bool) {
    let kept = [
        ("summary.protected", &report.tree.protected_keys),
        ("summary.kept_fill", &report.tree.kept_fill_keys),
    ];
    for (message, keys) in kept {
        if keys.is_empty() {
            continue;
        }
        Logger::info(tf!(message, icons::SHIELD, keys.len()));
        if detail {
            for key in keys {
                Logger::info(format!("    {}", Colors::dim(key)));
            }
        }
    }
}

/// 打印运行汇总
pub fn print_run_totals(totals: &RunTotals) {
    Logger::info("");
    Logger::info(Colors::bold(&tf!("summary.run_header", APP_NAME)));
    Logger::info("═══════════════════════════════════════");
    Logger::info(tf!("summary.total_files", icons::SUMMARY, totals.files));
    Logger::info(tf!("summary.total_changed", icons::SUMMARY, totals.files_changed));
    Logger::info(tf!("summary.total_removed", icons::SUMMARY, totals.keys_removed));
    Logger::info(tf!("summary.total_saved", icons::SUMMARY, totals.bytes_saved));

    if totals.files_changed == 0 {
        Logger::success(t!("summary.all_clean"));
    }
}
