use serde::Deserialize;
use std::path::PathBuf;

/// Launch profile embedded at compile time. No configuration is read from
/// disk when the launcher runs.
const EMBEDDED_PROFILE: &str = include_str!("../config/launcher.toml");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LaunchProfile {
    /// Runtime executable name, resolved through PATH
    #[serde(default = "default_runtime")]
    pub runtime: String,
    #[serde(default = "default_native_access_module")]
    pub native_access_module: String,
    /// `<module>/<package>` exported to ALL-UNNAMED
    #[serde(default = "default_exported_package")]
    pub exported_package: String,
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,
    #[serde(default = "default_artifact_name")]
    pub artifact_name: String,
}

fn default_runtime() -> String {
    "java".to_string()
}

fn default_native_access_module() -> String {
    "javafx.graphics".to_string()
}

fn default_exported_package() -> String {
    "javafx.graphics/com.sun.glass.utils".to_string()
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from("bin")
}

fn default_artifact_name() -> String {
    "SpotifyOverlay.jar".to_string()
}

impl Default for LaunchProfile {
    fn default() -> Self {
        Self {
            runtime: default_runtime(),
            native_access_module: default_native_access_module(),
            exported_package: default_exported_package(),
            artifact_dir: default_artifact_dir(),
            artifact_name: default_artifact_name(),
        }
    }
}

impl LaunchProfile {
    /// The profile compiled into the binary.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml(EMBEDDED_PROFILE)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let profile: LaunchProfile = toml::from_str(content)?;
        Ok(profile)
    }

    /// Artifact path relative to the working directory, e.g. `bin/SpotifyOverlay.jar`
    pub fn artifact_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.artifact_name)
    }

    /// Human-readable runtime name used in the "not installed" message
    pub fn runtime_display(&self) -> &str {
        std::path::Path::new(&self.runtime)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(self.runtime.as_str())
    }
}
