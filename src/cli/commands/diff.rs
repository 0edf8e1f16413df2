use anyhow::Result;

use super::super::args::DiffCommand;
use super::{CommandKind, CommandResult, CommandSummary, DiffSummary, helper::load_snapshot};
use crate::core::compare::compare_snapshots;

pub fn diff(cmd: DiffCommand) -> Result<CommandResult> {
    let left = load_snapshot(&cmd.left, cmd.verbose)?;
    let right = load_snapshot(&cmd.right, cmd.verbose)?;

    let diff = compare_snapshots(&left.registry, &right.registry);

    let mut issues = left.issues;
    issues.extend(right.issues);

    Ok(CommandResult {
        kind: CommandKind::Diff,
        summary: CommandSummary::Diff(DiffSummary {
            left: cmd.left,
            right: cmd.right,
            diff,
            json: cmd.json,
        }),
        issues,
        files_scanned: left.files_scanned + right.files_scanned,
    })
}
