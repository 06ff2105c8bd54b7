//! Single source of truth for ALL filesystem layout fledge touches.
//!
//! This module defines WHERE files live. It has no I/O, no validation,
//! no business logic. One file shows the entire layout.
//!
//! # User-Level Paths (~/.fledge/)
//!
//! ```text
//! ~/.fledge/
//! └── config.toml              # SDK locations, build defaults
//! ```
//!
//! # App Project Layout
//!
//! Host directories are checked in by the author; fledge only refreshes
//! generated files inside them.
//!
//! ```text
//! myapp/
//! ├── pubspec.yaml             # Manifest
//! ├── .packages                # Dart package map (name:location per line)
//! ├── .flutter-plugins         # Generated plugin list
//! ├── example/                 # Optional example app (plugin projects)
//! ├── android/
//! │   ├── build.gradle
//! │   ├── local.properties     # Generated
//! │   └── app/
//! │       ├── build.gradle
//! │       └── src/main/java/io/flutter/plugins/
//! │           └── GeneratedPluginRegistrant.java
//! └── ios/
//!     ├── Runner.xcodeproj/project.pbxproj
//!     ├── Flutter/Generated.xcconfig          # Generated
//!     └── Runner/GeneratedPluginRegistrant.{h,m}
//! ```
//!
//! # Module Project Layout
//!
//! Hosts are hidden dot-directories owned entirely by fledge; they are
//! created on demand and safe to delete.
//!
//! ```text
//! mymodule/
//! ├── pubspec.yaml
//! ├── .android/
//! │   ├── settings.gradle
//! │   ├── local.properties
//! │   └── Flutter/src/main/java/io/flutter/plugins/
//! │       └── GeneratedPluginRegistrant.java
//! └── .ios/
//!     └── Flutter/
//!         ├── Generated.xcconfig
//!         ├── podhelper.rb
//!         └── FlutterPluginRegistrant/Classes/
//!             └── GeneratedPluginRegistrant.{h,m}
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// User Level (~/.fledge/)
// =============================================================================

/// User's fledge home directory: `~/.fledge/`
pub fn fledge_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fledge")
}

/// Global config file: `~/.fledge/config.toml`
pub fn config_path() -> PathBuf {
    fledge_home().join("config.toml")
}

// =============================================================================
// Project Level
// =============================================================================

/// Project-level paths, relative to a project root.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use fledge::paths::project;
///
/// let root = Path::new("/home/user/myapp");
/// let manifest = project::manifest_path(root);
/// assert_eq!(manifest, Path::new("/home/user/myapp/pubspec.yaml"));
/// ```
pub mod project {
    use super::*;

    /// Project manifest: `pubspec.yaml`
    pub fn manifest_path(root: &Path) -> PathBuf {
        root.join("pubspec.yaml")
    }

    /// Dart package map: `.packages`
    pub fn packages_path(root: &Path) -> PathBuf {
        root.join(".packages")
    }

    /// Generated plugin list: `.flutter-plugins`
    pub fn plugins_list_path(root: &Path) -> PathBuf {
        root.join(".flutter-plugins")
    }

    /// Example app directory: `example/`
    pub fn example_dir(root: &Path) -> PathBuf {
        root.join("example")
    }

    /// Example app manifest: `example/pubspec.yaml`
    pub fn example_manifest_path(root: &Path) -> PathBuf {
        root.join("example/pubspec.yaml")
    }
}

// =============================================================================
// Android Host
// =============================================================================

/// Android host paths.
///
/// `app_host`/`module_host` map a project root to its host directory; every
/// other function takes that host directory.
pub mod android {
    use super::*;

    /// Checked-in host of an app project: `android/`
    pub fn app_host(root: &Path) -> PathBuf {
        root.join("android")
    }

    /// Generated host of a module project: `.android/`
    pub fn module_host(root: &Path) -> PathBuf {
        root.join(".android")
    }

    /// Top-level gradle build file (scanned for `group`): `build.gradle`
    pub fn build_gradle(host: &Path) -> PathBuf {
        host.join("build.gradle")
    }

    /// App gradle build file (scanned for `applicationId`): `app/build.gradle`
    pub fn app_build_gradle(host: &Path) -> PathBuf {
        host.join("app/build.gradle")
    }

    /// Generated gradle settings (module hosts only): `settings.gradle`
    pub fn settings_gradle(host: &Path) -> PathBuf {
        host.join("settings.gradle")
    }

    /// Generated SDK locations: `local.properties`
    pub fn local_properties(host: &Path) -> PathBuf {
        host.join("local.properties")
    }

    /// Plugin registrant in an app host:
    /// `app/src/main/java/io/flutter/plugins/GeneratedPluginRegistrant.java`
    pub fn app_registrant(host: &Path) -> PathBuf {
        host.join("app/src/main/java/io/flutter/plugins/GeneratedPluginRegistrant.java")
    }

    /// Plugin registrant in a module host:
    /// `Flutter/src/main/java/io/flutter/plugins/GeneratedPluginRegistrant.java`
    pub fn module_registrant(host: &Path) -> PathBuf {
        host.join("Flutter/src/main/java/io/flutter/plugins/GeneratedPluginRegistrant.java")
    }
}

// =============================================================================
// iOS Host
// =============================================================================

/// iOS host paths. Same shape as [`android`]: two root mappers, then
/// host-relative files.
pub mod ios {
    use super::*;

    /// Checked-in host of an app project: `ios/`
    pub fn app_host(root: &Path) -> PathBuf {
        root.join("ios")
    }

    /// Generated host of a module project: `.ios/`
    pub fn module_host(root: &Path) -> PathBuf {
        root.join(".ios")
    }

    /// Generated build settings bridge: `Flutter/Generated.xcconfig`
    pub fn xcconfig(host: &Path) -> PathBuf {
        host.join("Flutter/Generated.xcconfig")
    }

    /// Generated CocoaPods helper (module hosts only): `Flutter/podhelper.rb`
    pub fn podhelper(host: &Path) -> PathBuf {
        host.join("Flutter/podhelper.rb")
    }

    /// Xcode project file (scanned for bundle identifiers):
    /// `Runner.xcodeproj/project.pbxproj`
    pub fn pbxproj(host: &Path) -> PathBuf {
        host.join("Runner.xcodeproj/project.pbxproj")
    }

    /// Registrant header in an app host: `Runner/GeneratedPluginRegistrant.h`
    pub fn app_registrant_header(host: &Path) -> PathBuf {
        host.join("Runner/GeneratedPluginRegistrant.h")
    }

    /// Registrant implementation in an app host: `Runner/GeneratedPluginRegistrant.m`
    pub fn app_registrant_impl(host: &Path) -> PathBuf {
        host.join("Runner/GeneratedPluginRegistrant.m")
    }

    /// Registrant header in a module host:
    /// `Flutter/FlutterPluginRegistrant/Classes/GeneratedPluginRegistrant.h`
    pub fn module_registrant_header(host: &Path) -> PathBuf {
        host.join("Flutter/FlutterPluginRegistrant/Classes/GeneratedPluginRegistrant.h")
    }

    /// Registrant implementation in a module host:
    /// `Flutter/FlutterPluginRegistrant/Classes/GeneratedPluginRegistrant.m`
    pub fn module_registrant_impl(host: &Path) -> PathBuf {
        host.join("Flutter/FlutterPluginRegistrant/Classes/GeneratedPluginRegistrant.m")
    }
}
