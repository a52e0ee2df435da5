//! Resolve command: print one type's layout

use colored::Colorize;
use form_core::{ConfigResolver, ResolvedLayout};
use form_meta::{FormConfig, ResourceType};

use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(resolver: &ConfigResolver, resource_type: &str, json: bool) -> Result<()> {
    let config = resolver.resolve()?;
    let resource_type = ResourceType::new(resource_type);
    let layout = resolve_layout(&config, &resource_type)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&layout.to_json())?);
        return Ok(());
    }

    if !config.is_configured(&resource_type) {
        eprintln!(
            "{} {} has no overrides; showing the base layout",
            "warning:".yellow().bold(),
            resource_type.as_str().cyan()
        );
    }
    print!("{}", layout.outline());
    println!();
    println!(
        "{} {}",
        "Required:".dimmed(),
        layout.required_fields.join(", ")
    );

    Ok(())
}

pub(crate) fn resolve_layout(
    config: &FormConfig,
    resource_type: &ResourceType,
) -> Result<ResolvedLayout> {
    tracing::debug!(%resource_type, "Resolving layout");
    Ok(form_core::resolve(resource_type, config)?)
}
