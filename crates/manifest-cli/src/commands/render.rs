//! The render command

use std::fs;
use std::path::Path;

use colored::Colorize;

use manifest_core::{FileTemplateSource, ProjectLayout, TemplateSource};
use manifest_doc::render_node;

use crate::error::{CliError, Result};

/// Render the project template with one environment's values.
pub fn run_render(
    project: &Path,
    env_name: &str,
    strict: bool,
    output: Option<&Path>,
) -> Result<()> {
    let layout = ProjectLayout::new(project);
    let template = FileTemplateSource::new(layout.template_manifest()).load_template()?;
    let snapshot = layout.env_store().read(env_name)?;

    let (rendered, unresolved) = render_node(&template, &snapshot);
    if strict && !unresolved.is_empty() {
        return Err(CliError::user(format!(
            "Unresolved placeholders in template: {}",
            unresolved.join(", ")
        )));
    }
    if !unresolved.is_empty() {
        eprintln!(
            "{}: {} placeholder(s) left unresolved: {}",
            "warning".yellow().bold(),
            unresolved.len(),
            unresolved.join(", ")
        );
    }

    let content = serde_json::to_string_pretty(&rendered.to_value())?;
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!(
                "{} Rendered manifest written to {}",
                "OK".green().bold(),
                path.display()
            );
        }
        None => println!("{content}"),
    }

    Ok(())
}
