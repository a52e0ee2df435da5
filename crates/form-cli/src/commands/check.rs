//! Check command: validate every layer and every configured type

use colored::Colorize;
use form_core::{ConfigResolver, LayoutResolver};

use crate::error::Result;

/// Run the check command
///
/// Loading already resolves every type once; this additionally reports
/// which layers were read and how many types and fields are configured.
pub fn run_check(resolver: &ConfigResolver) -> Result<()> {
    println!("{}", "Configuration layers".bold());
    for (layer, path) in resolver.layer_paths() {
        match path {
            Some(path) => println!("  {:<10} {}", layer.green(), path),
            None => println!("  {:<10} {}", layer.dimmed(), "(none)".dimmed()),
        }
    }
    println!();

    let config = resolver.resolve()?;
    let layouts = LayoutResolver::new(&config);
    let types = config.resource_types();
    let mut warnings = 0;
    for resource_type in &types {
        let layout = layouts.resolve(resource_type)?;
        for path in layout.unrendered_required() {
            eprintln!(
                "{} {} requires {}, but no rendered field edits it",
                "warning:".yellow().bold(),
                resource_type.as_str().cyan(),
                path
            );
            warnings += 1;
        }
    }
    if warnings > 0 {
        eprintln!();
    }

    println!(
        "{} {} pages, {} fields, {} resource types",
        "OK".green().bold(),
        config.pages().len(),
        config.fields().len(),
        types.len()
    );
    match config.default_resource_type() {
        Some(default) => println!("{} {}", "Default type:".dimmed(), default),
        None => println!("{} {}", "Default type:".dimmed(), "(none)".dimmed()),
    }

    Ok(())
}
