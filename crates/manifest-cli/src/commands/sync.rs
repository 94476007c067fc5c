//! The sync command

use std::path::Path;

use colored::Colorize;

use manifest_core::{
    DotenvEnvironment, FileDeployedSource, FileTemplateSource, ProjectLayout, SyncEngine,
    SyncOptions,
};

use crate::error::Result;

/// Reconcile one environment against a deployed manifest file.
pub fn run_sync(
    project: &Path,
    env_name: &str,
    deployed: &Path,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let layout = ProjectLayout::new(project);
    let deployed_source = FileDeployedSource::new(deployed);
    let template_source = FileTemplateSource::new(layout.template_manifest());
    let environment = DotenvEnvironment::new(layout.env_store(), env_name);

    let engine = SyncEngine::new(&deployed_source, &template_source, &environment);
    let outcome = engine.sync(&SyncOptions { dry_run })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if outcome.is_noop() {
        println!(
            "{} Environment '{}' already matches the deployed manifest.",
            "OK".green().bold(),
            env_name
        );
    } else {
        let verb = if dry_run { "Would update" } else { "Updated" };
        println!(
            "{} {} {} value(s) in environment '{}':",
            "=>".blue().bold(),
            verb,
            outcome.updated.len(),
            env_name
        );
        for (key, value) in &outcome.updated {
            println!("   {} = {}", key.cyan(), value);
        }
    }

    Ok(())
}
