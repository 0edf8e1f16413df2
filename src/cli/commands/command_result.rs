use std::path::PathBuf;

use crate::core::{Registry, compare::SnapshotDiff, error::ScanError};

use super::super::exit_status::ExitStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Scan,
    Minify,
    Diff,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Snapshot(SnapshotSummary),
    Diff(DiffSummary),
    Init(InitSummary),
}

/// Output of `scan` and `minify`.
#[derive(Debug)]
pub struct SnapshotSummary {
    pub registry: Registry,
    pub third_party_removed: usize,
    /// Print the registry as JSON instead of tables.
    pub json: bool,
    /// File the JSON snapshot was written to, if any.
    pub written_to: Option<PathBuf>,
}

#[derive(Debug)]
pub struct DiffSummary {
    pub left: PathBuf,
    pub right: PathBuf,
    pub diff: SnapshotDiff,
    pub json: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running idshrink commands
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    /// Files skipped during scanning, across every scanned project.
    pub issues: Vec<ScanError>,
    /// Number of source files that were read and extracted.
    pub files_scanned: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Diff(summary) if !summary.diff.is_empty() => ExitStatus::Failure,
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
