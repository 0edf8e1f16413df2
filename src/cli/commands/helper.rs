use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandKind, CommandResult, CommandSummary, SnapshotSummary};
use crate::{
    cli::args::{CommonArgs, OutputArgs},
    core::{Registry, ScanContext, ScanOutcome, error::ScanError},
};

/// One side of a diff.
pub struct LoadedSnapshot {
    pub registry: Registry,
    /// Files skipped while scanning; always empty for snapshot files.
    pub issues: Vec<ScanError>,
    /// Zero for snapshot files.
    pub files_scanned: usize,
}

/// Write `registry` as pretty JSON to `path`.
pub fn write_snapshot(registry: &Registry, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(registry).context("Failed to serialize snapshot")?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write snapshot: {}", path.display()))
}

/// Read a JSON snapshot. Missing categories are treated as empty.
pub fn read_snapshot(path: &Path) -> Result<Registry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))
}

/// Load one side of a diff: a directory is scanned and minified, a file is
/// read as a snapshot.
pub fn load_snapshot(path: &Path, verbose: bool) -> Result<LoadedSnapshot> {
    if path.is_dir() {
        let ctx = ScanContext::new(Some(path), verbose)?;
        let outcome = ctx
            .minify()
            .with_context(|| format!("Failed to minify {}", path.display()))?;
        Ok(LoadedSnapshot {
            registry: outcome.registry,
            issues: outcome.issues,
            files_scanned: outcome.files_scanned,
        })
    } else {
        Ok(LoadedSnapshot {
            registry: read_snapshot(path)?,
            issues: Vec::new(),
            files_scanned: 0,
        })
    }
}

/// Shared tail of `scan` and `minify`: write the snapshot if asked and build
/// the command result.
pub fn finish_snapshot(
    kind: CommandKind,
    outcome: ScanOutcome,
    output: &OutputArgs,
) -> Result<CommandResult> {
    if let Some(path) = &output.output {
        write_snapshot(&outcome.registry, path)?;
    }

    Ok(CommandResult {
        kind,
        summary: CommandSummary::Snapshot(SnapshotSummary {
            registry: outcome.registry,
            third_party_removed: outcome.third_party_removed,
            json: output.json,
            written_to: output.output.clone(),
        }),
        issues: outcome.issues,
        files_scanned: outcome.files_scanned,
    })
}

pub fn scan_context(common: &CommonArgs) -> Result<ScanContext> {
    ScanContext::new(common.source_root.as_deref(), common.verbose)
}
