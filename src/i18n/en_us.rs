// ============================================================================
// I18nPrune - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Commands
    ("cli.check.start", "Checking translation catalogs for extra keys..."),
    ("cli.prune.start", "Pruning extra keys from translation catalogs..."),
    // Errors
    (
        "error.catalog_dir_not_exist",
        "Catalog directory does not exist: {}",
    ),
    ("error.load_reference", "Failed to load reference catalog {}"),
    ("error.load_target", "Failed to load target catalog '{}'"),
    // Init
    ("init.start", "Initializing configuration file..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite it"),
    ("init.config_created", "Configuration file created: {}"),
    (
        "init.next_steps",
        "Edit [catalog] to point at your messages directory, then run 'i18n-prune check'",
    ),
    ("init.create_failed", "Failed to create configuration file: {}"),
    // Prune
    ("prune.targets", "Target languages: {}"),
    ("prune.processing", "Processing {} ({})"),
    (
        "prune.dry_run_complete",
        "Dry run complete, no files were modified",
    ),
    ("prune.completed", "Pruning completed, {} files changed"),
    // Summary
    ("summary.file_header", "{} {} ({})"),
    ("summary.nothing_to_do", "{} No extra keys"),
    ("summary.extra_keys", "Extra keys: {}"),
    (
        "summary.classified",
        "{} redundant section keys: {}, array artifacts: {}, generic extras: {}",
    ),
    (
        "summary.sections_removed",
        "{} Redundant sections removed: {} ({} bytes)",
    ),
    ("summary.section_detail", "    {} ({} bytes)"),
    ("summary.array_removed", "{} Array artifacts removed: {}"),
    ("summary.generic_removed", "{} {}: {} extra keys removed"),
    ("summary.flat_keys", "{} Flat error keys among extras: {}"),
    (
        "summary.missing",
        "{} Keys already absent when deleting: {}",
    ),
    ("summary.filled", "{} Missing translations filled: {}"),
    ("summary.protected", "{} Protected keys kept: {}"),
    ("summary.kept_fill", "{} Filled keys kept: {}"),
    ("summary.keys_removed", "Entries removed: {}"),
    ("summary.size", "Size: {} {} {} bytes (saved {} bytes)"),
    ("summary.written", "{} Written {}"),
    ("summary.not_written", "{} Not written (dry run)"),
    ("summary.run_header", "{} Summary"),
    ("summary.total_files", "{} Files processed: {}"),
    ("summary.total_changed", "{} Files with changes: {}"),
    ("summary.total_removed", "{} Entries removed: {}"),
    ("summary.total_saved", "{} Bytes saved: {}"),
    ("summary.all_clean", "All catalogs are clean"),
];
