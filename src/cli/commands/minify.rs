use anyhow::Result;

use super::super::args::ScanCommand;
use super::{
    CommandKind, CommandResult,
    helper::{finish_snapshot, scan_context},
};

/// Harvest the project and assign substitutes to ids and classes.
///
/// Token exhaustion is fatal: no snapshot is written.
pub fn minify(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = scan_context(&cmd.common)?;
    let outcome = ctx.minify()?;

    finish_snapshot(CommandKind::Minify, outcome, &cmd.output)
}
