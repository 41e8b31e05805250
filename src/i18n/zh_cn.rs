// ============================================================================
// I18nPrune - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 命令
    ("cli.check.start", "正在检查翻译文件中的多余键..."),
    ("cli.prune.start", "正在清理翻译文件中的多余键..."),
    // 错误信息
    ("error.catalog_dir_not_exist", "翻译目录不存在: {}"),
    ("error.load_reference", "加载参考语言文件失败 {}"),
    ("error.load_target", "加载目标语言 '{}' 失败"),
    // 初始化
    ("init.start", "正在初始化配置文件..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖"),
    ("init.config_created", "配置文件已创建: {}"),
    (
        "init.next_steps",
        "修改 [catalog] 指向翻译目录后运行 'i18n-prune check'",
    ),
    ("init.create_failed", "创建配置文件失败: {}"),
    // 清理
    ("prune.targets", "目标语言: {}"),
    ("prune.processing", "正在处理 {} ({})"),
    ("prune.dry_run_complete", "预演完成，未修改任何文件"),
    ("prune.completed", "清理完成，{} 个文件有变更"),
    // 汇总
    ("summary.file_header", "{} {} ({})"),
    ("summary.nothing_to_do", "{} 无需优化"),
    ("summary.extra_keys", "多余键: {} 个"),
    (
        "summary.classified",
        "{} 冗余子部分键: {} 个, 数组展平键: {} 个, 其他额外键: {} 个",
    ),
    ("summary.sections_removed", "{} 删除冗余子部分: {} 个 ({} 字节)"),
    ("summary.section_detail", "    {} ({} 字节)"),
    ("summary.array_removed", "{} 删除数组展平键: {} 个"),
    ("summary.generic_removed", "{} {}: 删除 {} 个额外键"),
    ("summary.flat_keys", "{} 其中 errors 扁平独有键: {} 个"),
    ("summary.missing", "{} 删除时已不存在的键: {} 个"),
    ("summary.filled", "{} 补齐缺失翻译: {} 个"),
    ("summary.protected", "{} 受保护保留的键: {} 个"),
    ("summary.kept_fill", "{} 补齐键保留: {} 个"),
    ("summary.keys_removed", "删除条目数: {}"),
    ("summary.size", "文件大小: {} {} {} 字节 (节省 {} 字节)"),
    ("summary.written", "{} 已写入 {}"),
    ("summary.not_written", "{} 未写入（预演模式）"),
    ("summary.run_header", "{} 汇总"),
    ("summary.total_files", "{} 处理文件数: {}"),
    ("summary.total_changed", "{} 有变更的文件: {}"),
    ("summary.total_removed", "{} 删除条目数: {}"),
    ("summary.total_saved", "{} 节省字节数: {}"),
    ("summary.all_clean", "所有翻译文件均已是最优"),
];
