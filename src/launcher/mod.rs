pub mod command;
pub mod outcome;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::LaunchProfile;
use command::Invocation;
use outcome::{ChildFailure, ExitFailure, Outcome};

/// Failures that abort the launch and make the launcher exit non-zero.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Error, file {} not found", .path.display())]
    MissingArtifact { path: PathBuf },
    /// The runtime exists but could not be started (permissions, bad format, ...)
    #[error("failed to start {runtime}: {source}")]
    Spawn {
        runtime: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub fn exit_status(&self) -> u8 {
        1
    }
}

/// Runs the bundled artifact on the configured runtime.
#[derive(Debug, Clone)]
pub struct Launcher {
    profile: LaunchProfile,
    /// Directory the artifact is resolved against and the child runs in.
    /// `None` means the process's current working directory.
    working_dir: Option<PathBuf>,
}

impl Launcher {
    pub fn new(profile: LaunchProfile) -> Self {
        Self {
            profile,
            working_dir: None,
        }
    }

    #[cfg(test)]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The invocation this launcher spawns. The artifact token is always
    /// the relative artifact path.
    pub fn invocation(&self) -> Invocation {
        Invocation::new(&self.profile, &self.profile.artifact_path())
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        match &self.working_dir {
            Some(dir) => dir.join(relative),
            None => relative.to_path_buf(),
        }
    }

    /// Fails with `MissingArtifact` (naming the relative path) when the
    /// artifact does not exist.
    pub fn check_artifact(&self) -> Result<PathBuf, LaunchError> {
        let relative = self.profile.artifact_path();
        let resolved = self.resolve(&relative);
        debug!("Checking artifact at {}", resolved.display());
        if !resolved.exists() {
            return Err(LaunchError::MissingArtifact { path: relative });
        }
        Ok(relative)
    }

    /// Checks the artifact, spawns the runtime with inherited stdio and
    /// waits for it to exit.
    pub async fn run(&self) -> Result<Outcome, LaunchError> {
        self.check_artifact()?;

        let invocation = self.invocation();
        info!("Launching {invocation}");

        let mut command = Command::new(invocation.program());
        command
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let status = match command.status().await {
            Ok(status) => status,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Runtime '{}' not found: {e}", invocation.program());
                return Ok(Outcome::RuntimeMissing {
                    runtime: self.profile.runtime_display().to_string(),
                });
            }
            Err(e) => {
                return Err(LaunchError::Spawn {
                    runtime: invocation.program().to_string(),
                    source: e,
                });
            }
        };

        debug!("Child exited with {status}");
        match ExitFailure::from_status(status) {
            None => Ok(Outcome::Completed),
            Some(failure) => {
                debug!("Child failed: {failure:?}");
                Ok(Outcome::ChildFailed(ChildFailure {
                    invocation,
                    failure,
                }))
            }
        }
    }
}

/// Runs the launcher and reports the result on the given streams.
///
/// Returns the exit status the launcher process should terminate with.
/// A missing artifact is reported on `out` like every recognized failure;
/// unrecognized spawn errors go to `err`.
pub async fn launch(
    launcher: &Launcher,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8> {
    match launcher.run().await {
        Ok(outcome) => {
            outcome.report(out)?;
            Ok(outcome.exit_status())
        }
        Err(e @ LaunchError::MissingArtifact { .. }) => {
            writeln!(out, "{e}")?;
            out.flush()?;
            Ok(e.exit_status())
        }
        Err(e @ LaunchError::Spawn { .. }) => {
            writeln!(err, "Error: {e}")?;
            err.flush()?;
            Ok(e.exit_status())
        }
    }
}
