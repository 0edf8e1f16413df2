use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, diff::diff, init::init, minify::minify, scan::scan},
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary and skipped files
/// - `Err` if the command fails (config error, token exhaustion, bad snapshot)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Minify(cmd)) => minify(cmd),
        Some(Command::Diff(cmd)) => diff(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
