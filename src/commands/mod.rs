//! Command implementations

pub mod inspect;
pub mod orgs;
pub mod prepare;

use anyhow::Result;
use fledge::project::Project;

/// Resolve the project a command operates on: an explicit directory when
/// given, the working directory otherwise.
fn load_project(dir: Option<&str>) -> Result<Project> {
    match dir {
        Some(dir) => Project::from_path(dir),
        None => Project::current(),
    }
}
