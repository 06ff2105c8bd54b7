//! Manifest module - pubspec.yaml reading
//!
//! A project's `pubspec.yaml` tells fledge what it is looking at: a
//! `flutter.plugin` section marks a plugin package and carries its platform
//! wiring, a `flutter.module` section marks an add-to-app module. Everything
//! else in the file belongs to pub and is ignored here.
//!
//! A missing manifest is not an error; it loads as an empty [`Manifest`].
//! A malformed one fails with a [`crate::error::ToolExit`] naming the file.
//!
//! # Example
//!
//! ```no_run
//! use fledge::manifest::Manifest;
//! use std::path::Path;
//!
//! let manifest = Manifest::load(Path::new("pubspec.yaml"))?;
//! if manifest.is_plugin() {
//!     println!("plugin package: {}", manifest.app_name().unwrap_or("?"));
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

pub use internal::{Manifest, ModuleDescriptor, PluginDescriptor};
