use anyhow::Result;

use super::super::args::ScanCommand;
use super::{
    CommandKind, CommandResult,
    helper::{finish_snapshot, scan_context},
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let ctx = scan_context(&cmd.common)?;
    let outcome = ctx.collect();

    finish_snapshot(CommandKind::Scan, outcome, &cmd.output)
}
