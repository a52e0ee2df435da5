//! Deposit form CLI
//!
//! Inspect and validate the per-resource-type layout configuration.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use form_core::ConfigResolver;
use form_fs::NormalizedPath;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    let resolver = config_resolver(&cli);
    match cli.command {
        Some(cmd) => execute_command(cmd, &resolver),
        None => {
            println!("{} Deposit form layouts", "deposit-form".green().bold());
            println!();
            println!("Run {} for available commands.", "deposit-form --help".cyan());
            Ok(())
        }
    }
}

fn config_resolver(cli: &Cli) -> ConfigResolver {
    let mut resolver = ConfigResolver::new(NormalizedPath::new(&cli.config_dir));
    if cli.no_builtins {
        resolver = resolver.without_builtins();
    }
    if cli.no_global {
        resolver = resolver.without_global();
    }
    resolver
}

fn execute_command(cmd: Commands, resolver: &ConfigResolver) -> Result<()> {
    match cmd {
        Commands::Resolve {
            resource_type,
            json,
        } => commands::run_resolve(resolver, &resource_type, json),
        Commands::Check => commands::run_check(resolver),
        Commands::ListTypes { family } => commands::run_list_types(resolver, family.as_deref()),
        Commands::Context => commands::run_context(resolver),
        Commands::Export {
            resource_type,
            output,
        } => commands::run_export(resolver, &resource_type, &output),
    }
}
