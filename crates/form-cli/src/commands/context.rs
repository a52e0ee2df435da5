//! Context command: the JSON tables embedded in the deposit page

use form_core::{ConfigResolver, FormContext};

use crate::error::Result;

/// Run the context command
pub fn run_context(resolver: &ConfigResolver) -> Result<()> {
    let config = resolver.resolve()?;
    let context = FormContext::from_config(&config);
    println!("{}", serde_json::to_string_pretty(&context.to_json())?);
    Ok(())
}
