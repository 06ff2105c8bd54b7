//! Orgs command - report organizations found in platform files

use anyhow::Result;
use serde_json::json;

use fledge::scanner;

use super::load_project;

pub fn execute(dir: Option<&str>, json_output: bool) -> Result<()> {
    let project = load_project(dir)?;
    let organizations = scanner::organization_names(&project);

    if json_output {
        let result = json!({ "organizations": organizations });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if organizations.is_empty() {
        println!("No organization found in platform files");
    }
    for organization in &organizations {
        println!("{}", organization);
    }
    Ok(())
}
