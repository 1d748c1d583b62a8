mod config;
mod launcher;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;

use crate::config::LaunchProfile;
use crate::launcher::Launcher;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only the launcher's own messages
    logging::init();

    let profile = LaunchProfile::embedded()?;
    debug!(
        "Profile: runtime={}, artifact={}",
        profile.runtime,
        profile.artifact_path().display()
    );

    let overlay = Launcher::new(profile);
    let status = launcher::launch(&overlay, &mut std::io::stdout(), &mut std::io::stderr()).await?;
    Ok(ExitCode::from(status))
}
