/// Construction of the runtime invocation.
///
/// The invocation is always five tokens: the runtime executable, the two
/// capability flags, `-jar`, and the artifact path.
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::LaunchProfile;

/// Flag telling the runtime to execute an archive
const JAR_FLAG: &str = "-jar";

/// Target of `--add-exports`: every class on the classpath
const EXPORT_TARGET: &str = "ALL-UNNAMED";

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    program: String,
    native_access: String,
    add_exports: String,
    artifact: PathBuf,
}

impl Invocation {
    pub fn new(profile: &LaunchProfile, artifact: &Path) -> Self {
        Self {
            program: profile.runtime.clone(),
            native_access: format!("--enable-native-access={}", profile.native_access_module),
            add_exports: format!("--add-exports={}={EXPORT_TARGET}", profile.exported_package),
            artifact: artifact.to_path_buf(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program, in order
    pub fn args(&self) -> [OsString; 4] {
        [
            OsString::from(&self.native_access),
            OsString::from(&self.add_exports),
            OsString::from(JAR_FLAG),
            self.artifact.clone().into_os_string(),
        ]
    }

    /// All five tokens, program first
    pub fn tokens(&self) -> Vec<String> {
        vec![
            self.program.clone(),
            self.native_access.clone(),
            self.add_exports.clone(),
            JAR_FLAG.to_string(),
            self.artifact.to_string_lossy().into_owned(),
        ]
    }
}

/// Renders as a quoted token list: `['java', '--enable-native-access=…', …]`
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.tokens().iter().map(|t| format!("'{t}'")).collect();
        write!(f, "[{}]", quoted.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_invocation() -> Invocation {
        let profile = LaunchProfile::default();
        Invocation::new(&profile, &profile.artifact_path())
    }

    #[test]
    fn test_tokens_fixed_order() {
        let tokens = default_invocation().tokens();
        let artifact = PathBuf::from("bin").join("SpotifyOverlay.jar");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], "java");
        assert_eq!(tokens[1], "--enable-native-access=javafx.graphics");
        assert_eq!(
            tokens[2],
            "--add-exports=javafx.graphics/com.sun.glass.utils=ALL-UNNAMED"
        );
        assert_eq!(tokens[3], "-jar");
        assert_eq!(tokens[4], artifact.to_string_lossy());
    }

    #[test]
    fn test_args_exclude_program() {
        let invocation = default_invocation();
        let args = invocation.args();
        assert_eq!(invocation.program(), "java");
        assert_eq!(args[2], OsString::from("-jar"));
        assert_eq!(
            args[3],
            PathBuf::from("bin").join("SpotifyOverlay.jar").into_os_string()
        );
    }

    #[test]
    fn test_artifact_is_last_token() {
        let profile = LaunchProfile::default();
        let invocation = Invocation::new(&profile, Path::new("elsewhere/app.jar"));
        assert_eq!(invocation.tokens().last().unwrap(), "elsewhere/app.jar");
    }

    #[test]
    fn test_flags_follow_profile() {
        let profile = LaunchProfile::from_toml(
            r#"
native_access_module = "javafx.media"
exported_package = "javafx.media/com.sun.media"
"#,
        )
        .unwrap();
        let tokens = Invocation::new(&profile, Path::new("app.jar")).tokens();
        assert_eq!(tokens[1], "--enable-native-access=javafx.media");
        assert_eq!(tokens[2], "--add-exports=javafx.media/com.sun.media=ALL-UNNAMED");
    }

    #[test]
    fn test_display_quotes_tokens() {
        let profile = LaunchProfile::default();
        let invocation = Invocation::new(&profile, Path::new("bin/SpotifyOverlay.jar"));
        assert_eq!(
            invocation.to_string(),
            "['java', '--enable-native-access=javafx.graphics', \
             '--add-exports=javafx.graphics/com.sun.glass.utils=ALL-UNNAMED', \
             '-jar', 'bin/SpotifyOverlay.jar']"
        );
    }
}
