//! Tool settings: SDK locations and build defaults.
//!
//! Settings are layered. `~/.fledge/config.toml` is read first (missing file
//! means defaults), then environment variables override it: `FLUTTER_ROOT`
//! for the Flutter SDK, `ANDROID_HOME` with `ANDROID_SDK_ROOT` as fallback
//! for the Android SDK. Generated files only mention an SDK when its
//! location is actually known.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::paths;

// =============================================================================
// Resolved Settings
// =============================================================================

/// Resolved settings the rest of the tool consumes.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Flutter SDK root, if known. Recorded in `local.properties` and
    /// `Generated.xcconfig`; left out of both when unknown.
    pub flutter_root: Option<PathBuf>,
    /// Android SDK root, if known. Recorded in `local.properties`.
    pub android_sdk: Option<PathBuf>,
    /// Build mode recorded in generated files: debug, profile or release.
    pub build_mode: String,
    /// Dart entrypoint recorded in `Generated.xcconfig`.
    pub target: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            flutter_root: None,
            android_sdk: None,
            build_mode: "release".to_string(),
            target: "lib/main.dart".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the config file, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = paths::config_path();
        let file = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?
        } else {
            ConfigFile::default()
        };

        let mut settings = Settings {
            flutter_root: file.sdk.flutter_root.as_deref().map(expand),
            android_sdk: file.sdk.android_sdk.as_deref().map(expand),
            build_mode: file.build.mode,
            target: file.build.target,
        };

        if let Some(root) = env_path("FLUTTER_ROOT") {
            settings.flutter_root = Some(root);
        }
        if let Some(sdk) = env_path("ANDROID_HOME").or_else(|| env_path("ANDROID_SDK_ROOT")) {
            settings.android_sdk = Some(sdk);
        }

        Ok(settings)
    }
}

/// A set, non-empty environment variable as a path.
fn env_path(name: &str) -> Option<PathBuf> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Expand `~` in config-file paths.
fn expand(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

// =============================================================================
// Config File
// =============================================================================

/// On-disk shape of `~/.fledge/config.toml`. Every key is optional.
///
/// ```toml
/// [sdk]
/// flutter_root = "~/flutter"
/// android_sdk = "~/Android/Sdk"
///
/// [build]
/// mode = "debug"
/// target = "lib/main.dart"
/// ```
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    sdk: SdkSection,
    #[serde(default)]
    build: BuildSection,
}

#[derive(Debug, Default, Deserialize)]
struct SdkSection {
    flutter_root: Option<String>,
    android_sdk: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuildSection {
    #[serde(default = "default_mode")]
    mode: String,
    #[serde(default = "default_target")]
    target: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        BuildSection {
            mode: default_mode(),
            target: default_target(),
        }
    }
}

fn default_mode() -> String {
    "release".to_string()
}

fn default_target() -> String {
    "lib/main.dart".to_string()
}
