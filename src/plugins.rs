//! Plugin discovery and the generated plugin list.
//!
//! A project's dependencies are resolved by pub into a `.packages` file
//! (one `name:location` pair per line). Each mapped package is probed for a
//! `flutter.plugin` manifest section; those that have one are the plugins
//! the platform hosts must register. The set is mirrored into
//! `.flutter-plugins` so gradle and CocoaPods tooling can locate plugin
//! sources without speaking pub.

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::Manifest;
use crate::paths;

/// A Flutter plugin some project depends on.
#[derive(Debug, Clone)]
pub struct Plugin {
    /// Package name, as keyed in `.packages`.
    pub name: String,
    /// Package root on disk.
    pub path: PathBuf,
    /// Java package of the Android implementation.
    pub android_package: Option<String>,
    /// Class registered on both platforms.
    pub plugin_class: Option<String>,
    /// Objective-C class prefix, empty when the plugin declares none.
    pub ios_prefix: String,
}

impl Plugin {
    /// True when the plugin carries enough wiring to register on Android.
    pub fn registers_on_android(&self) -> bool {
        self.android_package.is_some() && self.plugin_class.is_some()
    }

    /// True when the plugin carries enough wiring to register on iOS.
    pub fn registers_on_ios(&self) -> bool {
        self.plugin_class.is_some()
    }
}

// =============================================================================
// Discovery
// =============================================================================

/// Plugins the project depends on, in `.packages` order.
///
/// A project without a `.packages` file has no discoverable plugins; that is
/// normal before the first `pub get` and yields an empty set, not an error.
pub fn find_plugins(project_dir: &Path) -> Result<Vec<Plugin>> {
    let mut plugins = Vec::new();
    for (name, root) in parse_package_map(project_dir)? {
        if let Some(plugin) = probe_package(&name, &root)? {
            plugins.push(plugin);
        }
    }
    Ok(plugins)
}

/// Parse `.packages`: one `name:location` entry per line, `#` comments.
fn parse_package_map(project_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let path = paths::project::packages_path(project_dir);
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read package map: {}", path.display()))?;

    let mut entries = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, location) = match line.split_once(':') {
            Some(pair) => pair,
            None => continue,
        };
        if let Some(root) = package_root(project_dir, location) {
            entries.push((name.to_string(), root));
        }
    }
    Ok(entries)
}

/// Resolve a `.packages` location to a package root directory.
///
/// Locations point at the package's `lib/` directory, either as a `file://`
/// URI or a path relative to the project. Other URI schemes cannot be a
/// local plugin and are skipped.
fn package_root(project_dir: &Path, location: &str) -> Option<PathBuf> {
    let resolved = match location.strip_prefix("file://") {
        Some(absolute) => PathBuf::from(absolute),
        None if location.contains("://") => return None,
        None => project_dir.join(location),
    };

    if resolved.file_name() == Some(OsStr::new("lib")) {
        resolved.parent().map(Path::to_path_buf)
    } else {
        Some(resolved)
    }
}

/// Load a package's manifest and keep it if it declares itself a plugin.
fn probe_package(name: &str, root: &Path) -> Result<Option<Plugin>> {
    let manifest = Manifest::load(&paths::project::manifest_path(root))?;
    let descriptor = match manifest.plugin() {
        Some(descriptor) => descriptor,
        None => return Ok(None),
    };

    Ok(Some(Plugin {
        name: name.to_string(),
        path: root.to_path_buf(),
        android_package: descriptor.android_package.clone(),
        plugin_class: descriptor.plugin_class.clone(),
        ios_prefix: descriptor.ios_prefix.clone().unwrap_or_default(),
    }))
}

// =============================================================================
// Plugin List
// =============================================================================

/// Mirror the plugin set into `.flutter-plugins`, one `name=path` line per
/// plugin. An empty set removes the file. Returns whether a list file exists
/// afterwards.
pub fn write_plugins_list(project_dir: &Path, plugins: &[Plugin]) -> Result<bool> {
    let path = paths::project::plugins_list_path(project_dir);

    if plugins.is_empty() {
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove plugin list: {}", path.display()))?;
        }
        return Ok(false);
    }

    let mut contents = String::new();
    for plugin in plugins {
        contents.push_str(&format!("{}={}\n", plugin.name, plugin.path.display()));
    }
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write plugin list: {}", path.display()))?;
    Ok(true)
}
