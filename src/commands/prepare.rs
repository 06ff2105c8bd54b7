//! Prepare command - refresh platform host scaffolding

use anyhow::Result;
use colored::*;

use fledge::settings::Settings;

use super::load_project;

/// Bring the project's platform hosts up to date. Plugin checkouts get
/// their example app prepared instead of the checkout root.
pub fn execute(dir: Option<&str>) -> Result<()> {
    let project = load_project(dir)?;
    let settings = Settings::load()?;

    project.ensure_ready_for_platform_specific_tooling(&settings)?;

    if project.has_example_app() {
        let example = project.example();
        example.ensure_ready_for_platform_specific_tooling(&settings)?;
        println!(
            "{} {} (example app) ready for platform tooling",
            "✓".green(),
            example.name()
        );
    } else {
        println!(
            "{} {} ready for platform tooling",
            "✓".green(),
            project.name()
        );
    }
    Ok(())
}
