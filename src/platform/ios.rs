//! iOS host scaffolding.
//!
//! `Generated.xcconfig` bridges project facts (SDK location, entrypoint,
//! build mode) into Xcode build settings, and the registrant header plus
//! implementation pair wires discovered plugins into the engine's plugin
//! registry. Module hosts also get `podhelper.rb`, the script a host
//! application's Podfile loads to pull the module, its plugins and the
//! registrant in as pods.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::plugins::Plugin;
use crate::scanner;

use super::{write_file, PlatformScaffold, ScaffoldContext, GENERATED_NOTICE};

/// The iOS side of a project.
#[derive(Debug, Clone)]
pub struct IosProject {
    host_root: PathBuf,
    is_module: bool,
}

impl IosProject {
    /// App-flavor host rooted at `ios/`.
    pub fn for_app(project_dir: &Path) -> Self {
        IosProject {
            host_root: paths::ios::app_host(project_dir),
            is_module: false,
        }
    }

    /// Module-flavor host rooted at `.ios/`.
    pub fn for_module(project_dir: &Path) -> Self {
        IosProject {
            host_root: paths::ios::module_host(project_dir),
            is_module: true,
        }
    }

    /// Host directory on disk.
    pub fn host_root(&self) -> &Path {
        &self.host_root
    }

    /// `PRODUCT_BUNDLE_IDENTIFIER` from the Xcode project, when present.
    pub fn product_bundle_identifier(&self) -> Option<String> {
        scanner::product_bundle_identifier(&paths::ios::pbxproj(&self.host_root))
    }

    fn write_xcconfig(&self, ctx: &ScaffoldContext) -> Result<()> {
        let settings = ctx.settings;
        let mut contents = String::new();
        contents.push_str(GENERATED_NOTICE);
        contents.push('\n');
        if let Some(root) = &settings.flutter_root {
            contents.push_str(&format!("FLUTTER_ROOT={}\n", root.display()));
        }
        contents.push_str(&format!(
            "FLUTTER_APPLICATION_PATH={}\n",
            ctx.project_dir.display()
        ));
        contents.push_str(&format!("FLUTTER_TARGET={}\n", settings.target));
        contents.push_str("FLUTTER_BUILD_DIR=build\n");
        contents.push_str(&format!("FLUTTER_BUILD_MODE={}\n", settings.build_mode));
        contents.push_str("SYMROOT=${SOURCE_ROOT}/../build/ios\n");
        write_file(&paths::ios::xcconfig(&self.host_root), &contents)
    }

    fn write_podhelper(&self) -> Result<()> {
        write_file(
            &paths::ios::podhelper(&self.host_root),
            include_str!("../../resources/templates/ios/podhelper.rb.tmpl"),
        )
    }
}

impl PlatformScaffold for IosProject {
    fn platform(&self) -> &'static str {
        "ios"
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
            self.write_podhelper()?;
            self.write_xcconfig(ctx)?;
            write_file(
                &paths::ios::module_registrant_header(&self.host_root),
                &registrant_header(),
            )?;
            return write_file(
                &paths::ios::module_registrant_impl(&self.host_root),
                &registrant_impl(ctx.plugins),
            );
        }

        // A missing app host means the author does not target iOS.
        if !self.exists() {
            return Ok(());
        }
        self.write_xcconfig(ctx)?;
        write_file(
            &paths::ios::app_registrant_header(&self.host_root),
            &registrant_header(),
        )?;
        write_file(
            &paths::ios::app_registrant_impl(&self.host_root),
            &registrant_impl(ctx.plugins),
        )
    }
}

/// Objective-C registrant interface. Identical for every plugin set.
fn registrant_header() -> String {
    let mut out = String::new();
    out.push_str("//\n//  Generated file. Do not edit.\n//\n\n");
    out.push_str("#ifndef GeneratedPluginRegistrant_h\n");
    out.push_str("#define GeneratedPluginRegistrant_h\n\n");
    out.push_str("#import <Flutter/Flutter.h>\n\n");
    out.push_str("@interface GeneratedPluginRegistrant : NSObject\n");
    out.push_str("+ (void)registerWithRegistry:(NSObject<FlutterPluginRegistry>*)registry;\n");
    out.push_str("@end\n\n");
    out.push_str("#endif /* GeneratedPluginRegistrant_h */\n");
    out
}

/// Objective-C registrant implementation mirroring the discovered plugin
/// set. Plugins without a plugin class have no iOS implementation to
/// register; the declared prefix is applied to the class name.
fn registrant_impl(plugins: &[Plugin]) -> String {
    let mut imports = String::new();
    let mut registrations = String::new();
    for plugin in plugins {
        if let Some(class) = &plugin.plugin_class {
            let prefixed = format!("{}{}", plugin.ios_prefix, class);
            imports.push_str(&format!("#import <{}/{}.h>\n", plugin.name, prefixed));
            registrations.push_str(&format!(
                "  [{} registerWithRegistrar:[registry registrarForPlugin:@\"{}\"]];\n",
                prefixed, prefixed
            ));
        }
    }

    let mut out = String::new();
    out.push_str("//\n//  Generated file. Do not edit.\n//\n\n");
    out.push_str("#import \"GeneratedPluginRegistrant.h\"\n");
    out.push_str(&imports);
    out.push('\n');
    out.push_str("@implementation GeneratedPluginRegistrant\n\n");
    out.push_str("+ (void)registerWithRegistry:(NSObject<FlutterPluginRegistry>*)registry {\n");
    out.push_str(&registrations);
    out.push_str("}\n\n");
    out.push_str("@end\n");
    out
}
