//! Platform module - Android and iOS host scaffolding
//!
//! Each platform owns its host directory layout and its generated files.
//! The shared contract is [`PlatformScaffold`]: given a snapshot of the
//! project, bring the host's generated glue up to date.
//!
//! The two host flavors behave differently on purpose. App hosts
//! (`android/`, `ios/`) are checked in by the author, so a missing one
//! means "this project does not target that platform" and the scaffold
//! leaves it alone. Module hosts (`.android/`, `.ios/`) are generated end
//! to end and get created on demand.

mod android;
mod ios;

pub use android::AndroidProject;
pub use ios::IosProject;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::plugins::Plugin;
use crate::settings::Settings;

/// Everything a platform needs to know about the project it scaffolds.
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldContext<'a> {
    /// Project root directory.
    pub project_dir: &'a Path,
    /// Project name, used in generated build files.
    pub project_name: &'a str,
    /// Resolved tool settings.
    pub settings: &'a Settings,
    /// Plugins to register, in discovery order.
    pub plugins: &'a [Plugin],
}

/// One platform's view of a project.
pub trait PlatformScaffold {
    /// Platform label for output.
    fn platform(&self) -> &'static str;

    /// Whether the host directory exists on disk.
    fn exists(&self) -> bool;

    /// Bring the host's generated files up to date. Idempotent; rewrites
    /// every generated file it owns on each call.
    fn ensure_ready_for_tooling(&self, ctx: &ScaffoldContext) -> Result<()>;
}

/// Header stamped on generated build-settings files.
pub(crate) const GENERATED_NOTICE: &str =
    "// This is a generated file; do not edit or check into version control.";

/// Write a generated file, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
