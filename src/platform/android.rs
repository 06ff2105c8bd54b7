//! Android host scaffolding.
//!
//! Two generated artifacts: `local.properties` records SDK locations and
//! the build mode for gradle, and `GeneratedPluginRegistrant.java` wires
//! the discovered plugins into the embedding's plugin registry. Module
//! hosts additionally get a `settings.gradle` naming the generated
//! library project, and keep their registrant under `Flutter/` instead of
//! the app source tree.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::plugins::Plugin;
use crate::scanner;

use super::{write_file, PlatformScaffold, ScaffoldContext};

/// The Android side of a project.
#[derive(Debug, Clone)]
pub struct AndroidProject {
    host_root: PathBuf,
    is_module: bool,
}

impl AndroidProject {
    /// App-flavor host rooted at `android/`.
    pub fn for_app(project_dir: &Path) -> Self {
        AndroidProject {
            host_root: paths::android::app_host(project_dir),
            is_module: false,
        }
    }

    /// Module-flavor host rooted at `.android/`.
    pub fn for_module(project_dir: &Path) -> Self {
        AndroidProject {
            host_root: paths::android::module_host(project_dir),
            is_module: true,
        }
    }

    /// Host directory on disk.
    pub fn host_root(&self) -> &Path {
        &self.host_root
    }

    /// `applicationId` declared in `app/build.gradle`, when present.
    pub fn application_id(&self) -> Option<String> {
        scanner::gradle_application_id(&paths::android::app_build_gradle(&self.host_root))
    }

    /// `group` declared in the top-level `build.gradle`, when present.
    pub fn group(&self) -> Option<String> {
        scanner::gradle_group(&paths::android::build_gradle(&self.host_root))
    }

    fn write_settings_gradle(&self, ctx: &ScaffoldContext) -> Result<()> {
        let contents = include_str!("../../resources/templates/android/settings.gradle.tmpl")
            .replace("{{.name}}", ctx.project_name);
        write_file(&paths::android::settings_gradle(&self.host_root), &contents)
    }

    fn write_local_properties(&self, ctx: &ScaffoldContext) -> Result<()> {
        let settings = ctx.settings;
        let mut contents = String::new();
        if let Some(sdk) = &settings.android_sdk {
            contents.push_str(&format!("sdk.dir={}\n", sdk.display()));
        }
        if let Some(root) = &settings.flutter_root {
            contents.push_str(&format!("flutter.sdk={}\n", root.display()));
        }
        contents.push_str(&format!("flutter.buildMode={}\n", settings.build_mode));
        write_file(&paths::android::local_properties(&self.host_root), &contents)
    }
}

impl PlatformScaffold for AndroidProject {
    fn platform(&self) -> &'static str {
        "android"
    }

    fn exists(&self) -> bool {
        self.host_root.is_dir()
    }

    fn ensure_ready_for_tooling(&self, ctx: &ScaffoldContext) -> Result<()> {
        if self.is_module {
            fs::create_dir_all(&self.host_root).with_context(|| {
                format!(
                    "Failed to create host directory: {}",
                    self.host_root.display()
                )
            })?;
            self.write_settings_gradle(ctx)?;
            self.write_local_properties(ctx)?;
            return write_file(
                &paths::android::module_registrant(&self.host_root),
                &registrant_java(ctx.plugins),
            );
        }

        // A missing app host means the author does not target Android.
        if !self.exists() {
            return Ok(());
        }
        self.write_local_properties(ctx)?;
        write_file(
            &paths::android::app_registrant(&self.host_root),
            &registrant_java(ctx.plugins),
        )
    }
}

/// Java registrant class mirroring the discovered plugin set.
///
/// Plugins without both an Android package and a plugin class have no
/// Android implementation to register and are left out.
fn registrant_java(plugins: &[Plugin]) -> String {
    let mut imports = String::new();
    let mut registrations = String::new();
    for plugin in plugins {
        if let (Some(package), Some(class)) = (&plugin.android_package, &plugin.plugin_class) {
            imports.push_str(&format!("import {}.{};\n", package, class));
            registrations.push_str(&format!(
                "    {}.registerWith(registry.registrarFor(\"{}.{}\"));\n",
                class, package, class
            ));
        }
    }

    let mut out = String::new();
    out.push_str("package io.flutter.plugins;\n\n");
    out.push_str("import io.flutter.plugin.common.PluginRegistry;\n");
    out.push_str(&imports);
    out.push_str("\n/**\n * Generated file. Do not edit.\n */\n");
    out.push_str("public final class GeneratedPluginRegistrant {\n");
    out.push_str("  public static void registerWith(PluginRegistry registry) {\n");
    out.push_str("    if (alreadyRegisteredWith(registry)) {\n");
    out.push_str("      return;\n");
    out.push_str("    }\n");
    out.push_str(&registrations);
    out.push_str("  }\n\n");
    out.push_str("  private static boolean alreadyRegisteredWith(PluginRegistry registry) {\n");
    out.push_str("    final String key = GeneratedPluginRegistrant.class.getCanonicalName();\n");
    out.push_str("    if (registry.hasPlugin(key)) {\n");
    out.push_str("      return true;\n");
    out.push_str("    }\n");
    out.push_str("    registry.registrarFor(key);\n");
    out.push_str("    return false;\n");
    out.push_str("  }\n");
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use tempfile::TempDir;

    fn context<'a>(
        project_dir: &'a Path,
        settings: &'a Settings,
        plugins: &'a [Plugin],
    ) -> ScaffoldContext<'a> {
        ScaffoldContext {
            project_dir,
            project_name: "myapp",
            settings,
            plugins,
        }
    }

    fn sample_plugin() -> Plugin {
        Plugin {
            name: "url_launcher".to_string(),
            path: PathBuf::from("/srv/url_launcher"),
            android_package: Some("io.flutter.plugins.urllauncher".to_string()),
            plugin_class: Some("UrlLauncherPlugin".to_string()),
            ios_prefix: "FLT".to_string(),
        }
    }

    #[test]
    fn missing_app_host_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::default();
        let android = AndroidProject::for_app(dir.path());

        android
            .ensure_ready_for_tooling(&context(dir.path(), &settings, &[]))
            .unwrap();

        assert!(!android.exists());
    }

    #[test]
    fn app_host_gets_properties_and_registrant() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("android")).unwrap();
        let settings = Settings {
            flutter_root: Some(PathBuf::from("/opt/flutter")),
            android_sdk: Some(PathBuf::from("/opt/android-sdk")),
            ..Settings::default()
        };
        let android = AndroidProject::for_app(dir.path());

        android
            .ensure_ready_for_tooling(&context(dir.path(), &settings, &[sample_plugin()]))
            .unwrap();

        let properties =
            fs::read_to_string(dir.path().join("android/local.properties")).unwrap();
        assert!(properties.contains("sdk.dir=/opt/android-sdk"));
        assert!(properties.contains("flutter.sdk=/opt/flutter"));
        assert!(properties.contains("flutter.buildMode=release"));

        let registrant = fs::read_to_string(
            dir.path()
                .join("android/app/src/main/java/io/flutter/plugins/GeneratedPluginRegistrant.java"),
        )
        .unwrap();
        assert!(registrant.contains("import io.flutter.plugins.urllauncher.UrlLauncherPlugin;"));
        assert!(registrant.contains(
            "UrlLauncherPlugin.registerWith(registry.registrarFor(\"io.flutter.plugins.urllauncher.UrlLauncherPlugin\"));"
        ));
    }

    #[test]
    fn unknown_sdk_locations_are_omitted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("android")).unwrap();
        let settings = Settings::default();
        let android = AndroidProject::for_app(dir.path());

        android
            .ensure_ready_for_tooling(&context(dir.path(), &settings, &[]))
            .unwrap();

        let properties =
            fs::read_to_string(dir.path().join("android/local.properties")).unwrap();
        assert!(!properties.contains("sdk.dir"));
        assert!(!properties.contains("flutter.sdk"));
        assert!(properties.contains("flutter.buildMode=release"));
    }

    #[test]
    fn module_host_is_created_from_nothing() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::default();
        let android = AndroidProject::for_module(dir.path());

        android
            .ensure_ready_for_tooling(&context(dir.path(), &settings, &[]))
            .unwrap();

        let gradle_settings =
            fs::read_to_string(dir.path().join(".android/settings.gradle")).unwrap();
        assert!(gradle_settings.contains("rootProject.name = 'myapp'"));
        assert!(dir.path().join(".android/local.properties").is_file());
        assert!(dir
            .path()
            .join(".android/Flutter/src/main/java/io/flutter/plugins/GeneratedPluginRegistrant.java")
            .is_file());
    }

    #[test]
    fn registrant_skips_plugins_without_android_wiring() {
        let ios_only = Plugin {
            name: "ios_only".to_string(),
            path: PathBuf::from("/srv/ios_only"),
            android_package: None,
            plugin_class: Some("IosOnlyPlugin".to_string()),
            ios_prefix: String::new(),
        };

        let source = registrant_java(&[ios_only, sample_plugin()]);
        assert!(!source.contains("IosOnlyPlugin"));
        assert!(source.contains("UrlLauncherPlugin"));
    }

    #[test]
    fn registrant_without_plugins_still_compiles_shape() {
        let source = registrant_java(&[]);
        assert!(source.contains("public final class GeneratedPluginRegistrant"));
        assert!(source.contains("alreadyRegisteredWith"));
        assert!(!source.contains("registerWith(registry.registrarFor"));
    }

    #[test]
    fn identifier_accessors_read_gradle_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("android/app")).unwrap();
        fs::write(
            dir.path().join("android/build.gradle"),
            "group 'io.flutter.lib'\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("android/app/build.gradle"),
            "android {\n    defaultConfig {\n        applicationId \"io.flutter.someproject\"\n    }\n}\n",
        )
        .unwrap();

        let android = AndroidProject::for_app(dir.path());
        assert_eq!(
            android.application_id().as_deref(),
            Some("io.flutter.someproject")
        );
        assert_eq!(android.group().as_deref(), Some("io.flutter.lib"));
    }
}
