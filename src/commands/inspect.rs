//! Inspect command - show what fledge makes of a project

use anyhow::Result;
use colored::*;
use serde_json::json;

use fledge::platform::PlatformScaffold;
use fledge::plugins;
use fledge::project::Project;

use super::load_project;

pub fn execute(dir: Option<&str>, json_output: bool) -> Result<()> {
    let project = load_project(dir)?;
    let kind = classify(&project);
    let plugin_names: Vec<String> = plugins::find_plugins(project.directory())?
        .into_iter()
        .map(|plugin| plugin.name)
        .collect();

    if json_output {
        let result = json!({
            "name": project.name(),
            "directory": project.directory().display().to_string(),
            "kind": kind,
            "has_example_app": project.has_example_app(),
            "plugins": plugin_names,
            "android": {
                "host": project.android().host_root().display().to_string(),
                "exists": project.android().exists(),
            },
            "ios": {
                "host": project.ios().host_root().display().to_string(),
                "exists": project.ios().exists(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{} ({})", project.name().bold(), kind);
    println!("  directory: {}", project.directory().display());
    if project.has_example_app() {
        println!("  example app: {}", "yes".green());
    }
    for host in [
        project.android() as &dyn PlatformScaffold,
        project.ios() as &dyn PlatformScaffold,
    ] {
        let status = if host.exists() {
            "present".green()
        } else {
            "absent".dimmed()
        };
        println!("  {} host: {}", host.platform(), status);
    }
    if plugin_names.is_empty() {
        println!("  plugins: none");
    } else {
        println!("  plugins: {}", plugin_names.join(", "));
    }
    Ok(())
}

/// What flavor of project this is. A module declaration wins over plugin;
/// otherwise checked-in platform hosts distinguish an app from a bare
/// package.
fn classify(project: &Project) -> &'static str {
    if project.is_module() {
        "module"
    } else if project.is_plugin() {
        "plugin"
    } else if project.android().exists() || project.ios().exists() {
        "app"
    } else {
        "package"
    }
}
