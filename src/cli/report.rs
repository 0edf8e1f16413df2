//! Report formatting and printing utilities.
//!
//! Separate from core logic so idshrink can be used as a library. Every
//! printer has a `_to` variant taking a writer, used by tests.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandKind, CommandResult, CommandSummary, DiffSummary, InitSummary, SnapshotSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{
    Category, Registry,
    compare::{DivergenceRecord, Presence, SnapshotDiff},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Snapshot(summary) => {
            print_snapshot_to(result.kind, summary, result.files_scanned, &mut stdout);
        }
        CommandSummary::Diff(summary) => {
            print_diff_to(summary, &mut stdout);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }

    print_skip_warning(result.issues.len(), verbose);
}

/// Print a warning about files that were skipped.
pub fn print_skip_warning(count: usize, verbose: bool) {
    print_skip_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a skip warning to a custom writer.
///
/// In verbose mode each file was already reported while scanning.
pub fn print_skip_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) skipped (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// scan / minify
// ============================================================

pub fn print_snapshot_to<W: Write>(
    kind: CommandKind,
    summary: &SnapshotSummary,
    files_scanned: usize,
    writer: &mut W,
) {
    if summary.json {
        print_json_to(&summary.registry, writer);
        return;
    }

    let with_substitutes = kind == CommandKind::Minify;
    for category in Category::ALL {
        print_category_table(&summary.registry, category, with_substitutes, writer);
    }

    let counts = Category::ALL
        .iter()
        .map(|&c| format!("{} {}", summary.registry.entries(c).len(), c))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {}: {}",
            files_scanned,
            if files_scanned == 1 { "file" } else { "files" },
            counts
        )
        .green()
    );

    if summary.third_party_removed > 0 {
        let _ = writeln!(
            writer,
            "  {} {} third-party class(es) excluded",
            "note:".bold(),
            summary.third_party_removed
        );
    }

    if let Some(path) = &summary.written_to {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Wrote snapshot to {}", path.display()).green()
        );
    }
}

fn print_json_to<W: Write, T: serde::Serialize>(value: &T, writer: &mut W) {
    if serde_json::to_writer_pretty(&mut *writer, value).is_ok() {
        let _ = writeln!(writer);
    }
}

fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

fn print_category_table<W: Write>(
    registry: &Registry,
    category: Category,
    with_substitutes: bool,
    writer: &mut W,
) {
    let entries = registry.entries(category);
    if entries.is_empty() {
        return;
    }

    let name_width = entries
        .iter()
        .map(|e| UnicodeWidthStr::width(e.name.as_str()))
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let _ = writeln!(
        writer,
        "{} ({})",
        category.as_str().bold().cyan(),
        entries.len()
    );

    let mut header = format!("  {}  {:>7}  {:>7}", pad("NAME", name_width), "COUNT", "WEIGHT");
    if with_substitutes {
        header.push_str("  SUBSTITUTE");
    }
    let _ = writeln!(writer, "{}", header.dimmed());

    for entry in entries {
        let _ = write!(
            writer,
            "  {}  {:>7}  {:>7}",
            pad(&entry.name, name_width),
            entry.count,
            entry.weight()
        );
        if with_substitutes {
            let substitute = if entry.is_assigned() {
                entry.substitute.green()
            } else {
                "-".dimmed()
            };
            let _ = write!(writer, "  {}", substitute);
        }
        let _ = writeln!(writer);
    }

    let _ = writeln!(writer);
}

// ============================================================
// diff
// ============================================================

pub fn print_diff_to<W: Write>(summary: &DiffSummary, writer: &mut W) {
    if summary.json {
        print_json_to(&summary.diff, writer);
        return;
    }

    for category in Category::ALL {
        print_category_diff(&summary.diff, category, writer);
    }

    let left = summary.left.display();
    let right = summary.right.display();
    if summary.diff.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No differences between {} and {}", left, right).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} difference(s) between {} and {}",
                summary.diff.len(),
                left,
                right
            )
            .red()
        );
    }
}

fn print_category_diff<W: Write>(diff: &SnapshotDiff, category: Category, writer: &mut W) {
    let records = diff.records(category);
    if records.is_empty() {
        return;
    }

    let name_width = records
        .iter()
        .map(|r| UnicodeWidthStr::width(r.name.as_str()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(writer, "{}", category.as_str().bold().cyan());
    for record in records {
        print_record(record, name_width, writer);
    }
    let _ = writeln!(writer);
}

fn print_record<W: Write>(record: &DivergenceRecord, name_width: usize, writer: &mut W) {
    let name = pad(&record.name, name_width);
    match record.presence() {
        Presence::Both => {
            let mut line = format!(
                "  {} {}  count {} -> {}",
                "~".yellow(),
                name,
                record.count_left,
                record.count_right
            );
            if record.substitute_left != record.substitute_right {
                line.push_str(&format!(
                    "  substitute {} -> {}",
                    record.substitute_left.as_deref().unwrap_or(""),
                    record.substitute_right.as_deref().unwrap_or("")
                ));
            }
            let _ = writeln!(writer, "{}", line);
        }
        Presence::LeftOnly => {
            let _ = writeln!(
                writer,
                "  {} {}  count {}",
                "-".red(),
                name,
                record.count_left
            );
        }
        Presence::RightOnly => {
            let _ = writeln!(
                writer,
                "  {} {}  count {}",
                "+".green(),
                name,
                record.count_right
            );
        }
    }
}

// ============================================================
// init
// ============================================================

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

// ============================================================
// Tests
// ============================================================
