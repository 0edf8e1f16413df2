use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for diff tools.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command completed but found differences, or refused to overwrite
/// - `Error` (2): Command failed (config error, token exhaustion, unreadable snapshot)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but found differences, or refused to overwrite.
    Failure,
    /// Command failed before producing a result.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
