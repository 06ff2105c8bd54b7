//! Project module - the in-memory model of a Flutter project
//!
//! A [`Project`] is a snapshot taken at construction: manifests parsed,
//! platform hosts located, nothing touched on disk. The one mutating
//! operation is [`Project::ensure_ready_for_platform_specific_tooling`],
//! which refreshes the generated glue each platform host needs before
//! gradle or Xcode can build.
//!
//! # Example
//!
//! ```no_run
//! use fledge::project::Project;
//! use fledge::settings::Settings;
//!
//! let project = Project::from_path(".")?;
//! let settings = Settings::load()?;
//! project.ensure_ready_for_platform_specific_tooling(&settings)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

pub use internal::Project;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_snapshot_of_bare_directory() {
        let dir = TempDir::new().unwrap();
        let project = Project::from_directory(dir.path()).unwrap();
        assert!(project.manifest().is_empty());
        assert!(!project.is_module());
    }
}
