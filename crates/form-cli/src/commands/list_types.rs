//! List configured resource types

use std::collections::BTreeMap;

use colored::Colorize;
use form_core::ConfigResolver;
use form_meta::{FormConfig, ResourceType};

use crate::error::{CliError, Result};

/// Run the list-types command
pub fn run_list_types(resolver: &ConfigResolver, family_filter: Option<&str>) -> Result<()> {
    let config = resolver.resolve()?;
    let families = group_by_family(&config, family_filter);

    if let Some(family) = family_filter {
        if families.is_empty() {
            return Err(CliError::user(format!(
                "No configured resource types in family '{family}'"
            )));
        }
    }

    println!("{}", "Configured Resource Types".bold());
    println!();

    let mut total = 0;
    for (family, types) in &families {
        println!("{}:", family.cyan().bold());
        for resource_type in types {
            let marker = if config.has_type_layout(resource_type) {
                "layout".green()
            } else {
                "text only".dimmed()
            };
            let default = if config.default_resource_type() == Some(*resource_type) {
                " (default)".yellow().to_string()
            } else {
                String::new()
            };
            println!("  {:<40} {}{}", resource_type.as_str(), marker, default);
            total += 1;
        }
        println!();
    }

    println!(
        "{} {} types. Use {} to inspect one.",
        "Total:".dimmed(),
        total,
        "deposit-form resolve <type>".cyan()
    );

    Ok(())
}

fn group_by_family<'a>(
    config: &'a FormConfig,
    family_filter: Option<&str>,
) -> BTreeMap<&'a str, Vec<&'a ResourceType>> {
    let mut families: BTreeMap<&str, Vec<&ResourceType>> = BTreeMap::new();
    for resource_type in config.resource_types() {
        let family = resource_type.family();
        if family_filter.is_some_and(|filter| filter != family) {
            continue;
        }
        families.entry(family).or_default().push(resource_type);
    }
    families
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_meta::defaults::builtin_config;

    #[test]
    fn groups_builtin_types() {
        let config = builtin_config().unwrap();

        let families = group_by_family(&config, None);

        assert!(families.contains_key("textDocument"));
        assert!(families.contains_key("dataset"));
        assert!(
            families["textDocument"]
                .iter()
                .any(|t| t.as_str() == "textDocument-journalArticle")
        );
    }

    #[test]
    fn filter_keeps_one_family() {
        let config = builtin_config().unwrap();

        let families = group_by_family(&config, Some("textDocument"));

        assert_eq!(families.keys().copied().collect::<Vec<_>>(), vec!["textDocument"]);
        assert!(group_by_family(&config, Some("nope")).is_empty());
    }
}
