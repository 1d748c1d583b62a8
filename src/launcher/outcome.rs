/// Classification and console reporting of a finished launch.
use std::fmt;
use std::io::{self, Write};
use std::process::ExitStatus;

use super::command::Invocation;

/// How the child process failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitFailure {
    /// Non-zero exit status
    Code(i32),
    /// Terminated by a signal (Unix only)
    Signal(i32),
}

impl ExitFailure {
    /// Returns `None` for a successful exit.
    pub fn from_status(status: ExitStatus) -> Option<Self> {
        if status.success() {
            return None;
        }
        if let Some(code) = status.code() {
            return Some(Self::Code(code));
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Some(Self::Signal(signal));
            }
        }
        // No code and no signal: treat as a generic failure
        Some(Self::Code(-1))
    }
}

/// Failure detail attached to the child-failed message
#[derive(Debug, Clone, PartialEq)]
pub struct ChildFailure {
    pub invocation: Invocation,
    pub failure: ExitFailure,
}

impl fmt::Display for ChildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failure {
            ExitFailure::Code(code) => write!(
                f,
                "Command '{}' returned non-zero exit status {code}.",
                self.invocation
            ),
            ExitFailure::Signal(signal) => match signal_name(signal) {
                Some(name) => write!(
                    f,
                    "Command '{}' died with <Signals.{name}: {signal}>.",
                    self.invocation
                ),
                None => write!(
                    f,
                    "Command '{}' died with unknown signal {signal}.",
                    self.invocation
                ),
            },
        }
    }
}

/// Names of the signals whose numbers agree across Linux and the BSDs
fn signal_name(signal: i32) -> Option<&'static str> {
    let name = match signal {
        1 => "SIGHUP",
        2 => "SIGINT",
        3 => "SIGQUIT",
        4 => "SIGILL",
        5 => "SIGTRAP",
        6 => "SIGABRT",
        8 => "SIGFPE",
        9 => "SIGKILL",
        11 => "SIGSEGV",
        13 => "SIGPIPE",
        14 => "SIGALRM",
        15 => "SIGTERM",
        _ => return None,
    };
    Some(name)
}

/// Result of a launch that got as far as attempting the spawn.
///
/// None of these change the launcher's exit status: failures are reported
/// on the console only.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Child exited with status 0
    Completed,
    ChildFailed(ChildFailure),
    /// The runtime executable could not be found
    RuntimeMissing { runtime: String },
}

impl Outcome {
    /// Console message for this outcome, if any
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Completed => None,
            Outcome::ChildFailed(detail) => Some(format!("Error starting app {detail}")),
            Outcome::RuntimeMissing { runtime } => Some(format!("Error {runtime} not installed")),
        }
    }

    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(message) = self.message() {
            writeln!(out, "{message}")?;
        }
        out.flush()
    }

    /// Process exit status of the launcher after this outcome
    pub fn exit_status(&self) -> u8 {
        0
    }
}
