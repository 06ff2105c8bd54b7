//! Internal implementation for project module
//!
//! Construction reads both manifests (root, and `example/` when that
//! directory exists) so a malformed one fails fast with the file named,
//! before any command starts writing. Platform models are built eagerly;
//! they are path math only and cost nothing.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::manifest::Manifest;
use crate::paths;
use crate::platform::{AndroidProject, IosProject, PlatformScaffold, ScaffoldContext};
use crate::plugins;
use crate::settings::Settings;

/// A Flutter project rooted at a directory.
#[derive(Debug, Clone)]
pub struct Project {
    directory: PathBuf,
    manifest: Manifest,
    example_manifest: Manifest,
    android: AndroidProject,
    ios: IosProject,
}

impl Project {
    /// Snapshot the project at `directory`. Nothing is written.
    ///
    /// Panics when handed an empty path; that is a caller bug, not an
    /// input error.
    pub fn from_directory(directory: &Path) -> Result<Self> {
        assert!(
            !directory.as_os_str().is_empty(),
            "Project::from_directory requires a directory"
        );

        let manifest = Manifest::load(&paths::project::manifest_path(directory))?;
        let example_manifest = if paths::project::example_dir(directory).is_dir() {
            Manifest::load(&paths::project::example_manifest_path(directory))?
        } else {
            Manifest::empty()
        };

        Ok(Project::assemble(
            directory.to_path_buf(),
            manifest,
            example_manifest,
        ))
    }

    /// Snapshot the project at a path given as a string.
    pub fn from_path(path: &str) -> Result<Self> {
        Project::from_directory(Path::new(path))
    }

    /// Snapshot the project in the process working directory.
    pub fn current() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to resolve working directory")?;
        Project::from_directory(&cwd)
    }

    /// Module projects get hidden generated hosts, everything else the
    /// checked-in app flavor.
    fn assemble(directory: PathBuf, manifest: Manifest, example_manifest: Manifest) -> Self {
        let (android, ios) = if manifest.is_module() {
            (
                AndroidProject::for_module(&directory),
                IosProject::for_module(&directory),
            )
        } else {
            (
                AndroidProject::for_app(&directory),
                IosProject::for_app(&directory),
            )
        };
        Project {
            directory,
            manifest,
            example_manifest,
            android,
            ios,
        }
    }

    /// Project root directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Root manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The Android side of this project.
    pub fn android(&self) -> &AndroidProject {
        &self.android
    }

    /// The iOS side of this project.
    pub fn ios(&self) -> &IosProject {
        &self.ios
    }

    /// True when the manifest declares an add-to-app module.
    pub fn is_module(&self) -> bool {
        self.manifest.is_module()
    }

    /// True when the manifest declares a plugin.
    pub fn is_plugin(&self) -> bool {
        self.manifest.is_plugin()
    }

    /// Whether a real example app ships inside this project.
    pub fn has_example_app(&self) -> bool {
        paths::project::example_manifest_path(&self.directory).is_file()
    }

    /// The nested example project. Built from the manifest loaded at
    /// construction; the directory itself may not exist, which downstream
    /// operations already treat as "contributes nothing".
    pub fn example(&self) -> Project {
        Project::assemble(
            paths::project::example_dir(&self.directory),
            self.example_manifest.clone(),
            Manifest::empty(),
        )
    }

    /// Name used in generated build files: the manifest name when declared,
    /// else the directory name.
    pub fn name(&self) -> String {
        if let Some(name) = self.manifest.app_name() {
            return name.to_string();
        }
        self.directory
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "flutter_project".to_string())
    }

    /// Bring the platform hosts' generated files in step with the manifest
    /// and the resolved plugin set. Idempotent.
    ///
    /// Two gates, both deliberate. A project whose root directory is not on
    /// disk gets strictly nothing, not even directory creation. A project
    /// shipping an example app is a plugin checkout; the example is the
    /// thing that builds, so the root is left untouched and callers run
    /// this against `example/` instead.
    pub fn ensure_ready_for_platform_specific_tooling(&self, settings: &Settings) -> Result<()> {
        if !self.directory.is_dir() || self.has_example_app() {
            return Ok(());
        }

        let plugins = plugins::find_plugins(&self.directory)?;
        plugins::write_plugins_list(&self.directory, &plugins)?;

        let name = self.name();
        let ctx = ScaffoldContext {
            project_dir: &self.directory,
            project_name: &name,
            settings,
            plugins: &plugins,
        };

        for platform in [&self.android as &dyn PlatformScaffold, &self.ios] {
            platform.ensure_ready_for_tooling(&ctx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[should_panic(expected = "requires a directory")]
    fn empty_directory_path_is_a_caller_bug() {
        let _ = Project::from_directory(Path::new(""));
    }

    #[test]
    fn test_construction_reads_nothing_into_existence() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), "name: quiet\n").unwrap();

        let project = Project::from_directory(dir.path()).unwrap();
        assert_eq!(project.name(), "quiet");

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["pubspec.yaml"]);
    }

    #[test]
    fn name_falls_back_to_directory_name() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("fallback_app");
        fs::create_dir_all(&nested).unwrap();

        let project = Project::from_directory(&nested).unwrap();
        assert_eq!(project.name(), "fallback_app");
    }

    #[test]
    fn module_manifest_selects_hidden_hosts() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pubspec.yaml"),
            "name: embedded\nflutter:\n  module:\n    androidPackage: com.example.embedded\n",
        )
        .unwrap();

        let project = Project::from_directory(dir.path()).unwrap();
        assert!(project.is_module());
        assert!(project.android().host_root().ends_with(".android"));
        assert!(project.ios().host_root().ends_with(".ios"));
    }

    #[test]
    fn app_manifest_selects_checked_in_hosts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), "name: plain\n").unwrap();

        let project = Project::from_directory(dir.path()).unwrap();
        assert!(project.android().host_root().ends_with("android"));
        assert!(!project.android().host_root().ends_with(".android"));
    }

    #[test]
    fn test_example_detection() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), "name: plug\n").unwrap();

        let project = Project::from_directory(dir.path()).unwrap();
        assert!(!project.has_example_app());

        fs::create_dir_all(dir.path().join("example")).unwrap();
        assert!(!project.has_example_app());

        fs::write(dir.path().join("example/pubspec.yaml"), "name: plug_demo\n").unwrap();
        assert!(project.has_example_app());
    }

    #[test]
    fn example_project_reuses_loaded_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), "name: plug\n").unwrap();
        fs::create_dir_all(dir.path().join("example")).unwrap();
        fs::write(dir.path().join("example/pubspec.yaml"), "name: plug_demo\n").unwrap();

        let example = Project::from_directory(dir.path()).unwrap().example();
        assert_eq!(example.directory(), dir.path().join("example"));
        assert_eq!(example.name(), "plug_demo");
        assert!(!example.has_example_app());
    }

    #[test]
    fn malformed_example_manifest_names_the_example_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), "name: plug\n").unwrap();
        fs::create_dir_all(dir.path().join("example")).unwrap();
        fs::write(
            dir.path().join("example/pubspec.yaml"),
            "name: demo\nflutter:\n  plugin:\n    nope: true\n",
        )
        .unwrap();

        let err = Project::from_directory(dir.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("example"));
        assert!(message.contains("pubspec.yaml"));
    }
}
