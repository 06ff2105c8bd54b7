//! Internal implementation for manifest module
//!
//! Parses pubspec.yaml just far enough for scaffolding decisions. Unknown
//! keys outside the two descriptor sections are legal (the file is pub's
//! format and carries plenty we never look at); unknown keys inside
//! `flutter.plugin` or `flutter.module` are author mistakes and rejected
//! with the file named.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ToolExit;

// =============================================================================
// Types
// =============================================================================

/// Parsed view of a `pubspec.yaml`.
///
/// Only the parts fledge acts on are kept. A manifest loaded from a missing
/// file is "empty": no name, no descriptors.
#[derive(Debug, Clone)]
pub struct Manifest {
    name: Option<String>,
    plugin: Option<PluginDescriptor>,
    module: Option<ModuleDescriptor>,
}

/// The `flutter.plugin` section: platform wiring for a plugin package.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PluginDescriptor {
    /// Java package the Android implementation lives in.
    #[serde(default)]
    pub android_package: Option<String>,
    /// Class registered with the Android plugin registry.
    #[serde(default)]
    pub plugin_class: Option<String>,
    /// Objective-C class prefix of the iOS implementation.
    #[serde(default)]
    pub ios_prefix: Option<String>,
}

/// The `flutter.module` section: add-to-app module configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ModuleDescriptor {
    /// Java package the generated Android glue is placed under.
    #[serde(default)]
    pub android_package: Option<String>,
}

// =============================================================================
// Loading
// =============================================================================

impl Manifest {
    /// A manifest with nothing in it, as loaded from a missing file.
    pub fn empty() -> Self {
        Manifest {
            name: None,
            plugin: None,
            module: None,
        }
    }

    /// Load a manifest file. Missing file is an empty manifest; malformed
    /// content is a [`ToolExit`] naming `file`.
    pub fn load(file: &Path) -> Result<Self> {
        if !file.is_file() {
            return Ok(Manifest::empty());
        }
        let contents = fs::read_to_string(file)
            .with_context(|| format!("Failed to read manifest: {}", file.display()))?;
        parse(file, &contents)
    }

    /// The package name, when the manifest declares one.
    pub fn app_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True when nothing fledge cares about was present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.plugin.is_none() && self.module.is_none()
    }

    pub fn plugin(&self) -> Option<&PluginDescriptor> {
        self.plugin.as_ref()
    }

    pub fn module(&self) -> Option<&ModuleDescriptor> {
        self.module.as_ref()
    }

    /// True when the manifest carries a `flutter.plugin` section.
    pub fn is_plugin(&self) -> bool {
        self.plugin.is_some()
    }

    /// True when the manifest carries a `flutter.module` section.
    pub fn is_module(&self) -> bool {
        self.module.is_some()
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse manifest text. `file` only feeds error messages.
pub(crate) fn parse(file: &Path, contents: &str) -> Result<Manifest> {
    if contents.trim().is_empty() {
        return Ok(Manifest::empty());
    }

    let doc: serde_yaml::Value = serde_yaml::from_str(contents).map_err(|err| {
        ToolExit::new(format!(
            "{}: manifest is not valid YAML ({})",
            file.display(),
            err
        ))
    })?;

    if doc.is_null() {
        return Ok(Manifest::empty());
    }
    if !doc.is_mapping() {
        return Err(ToolExit::new(format!(
            "{}: manifest must be a YAML mapping",
            file.display()
        ))
        .into());
    }

    let name = doc
        .get("name")
        .and_then(|value| value.as_str())
        .map(str::to_string);

    let flutter = doc.get("flutter");
    let plugin = section(file, flutter, "plugin")?;
    let module = section(file, flutter, "module")?;

    Ok(Manifest {
        name,
        plugin,
        module,
    })
}

/// Extract one descriptor section from under the `flutter` key.
///
/// Absent or explicitly-null sections are `None`. Present sections must
/// deserialize cleanly or the whole manifest is rejected.
fn section<T: DeserializeOwned>(
    file: &Path,
    flutter: Option<&serde_yaml::Value>,
    key: &str,
) -> Result<Option<T>> {
    let value = match flutter.and_then(|f| f.get(key)) {
        Some(value) if !value.is_null() => value,
        _ => return Ok(None),
    };

    let parsed = serde_yaml::from_value(value.clone()).map_err(|err| {
        ToolExit::new(format!(
            "{}: unrecognized content in the flutter.{} section ({})",
            file.display(),
            key,
            err
        ))
    })?;
    Ok(Some(parsed))
}
