//! Environment file commands

use std::path::Path;

use colored::Colorize;

use manifest_core::ProjectLayout;

use crate::error::{CliError, Result};

/// List the environments present in the project.
pub fn run_list(project: &Path, json: bool) -> Result<()> {
    let store = ProjectLayout::new(project).env_store();
    let names = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        println!("No environments found in {}", store.dir().display());
        return Ok(());
    }
    for name in names {
        let keys = store.read(&name)?.len();
        println!("{} ({keys} values)", name.cyan());
    }
    Ok(())
}

/// Print a single value from an environment.
pub fn run_get(project: &Path, env_name: &str, key: &str) -> Result<()> {
    let store = ProjectLayout::new(project).env_store();
    let snapshot = store.read(env_name)?;
    match snapshot.get(key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => Err(CliError::user(format!(
            "Key '{key}' not found in environment '{env_name}'"
        ))),
    }
}

/// Set a single value in an environment.
pub fn run_set(project: &Path, env_name: &str, key: &str, value: &str) -> Result<()> {
    let store = ProjectLayout::new(project).env_store();
    let mut updates = std::collections::BTreeMap::new();
    updates.insert(key.to_string(), value.to_string());
    store.write(env_name, &updates)?;
    println!(
        "{} Set {} in environment '{}'",
        "OK".green().bold(),
        key.cyan(),
        env_name
    );
    Ok(())
}
