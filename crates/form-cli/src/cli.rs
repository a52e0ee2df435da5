//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Deposit form layouts - resolve and validate per-type form configuration
#[derive(Parser, Debug)]
#[command(name = "deposit-form")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding deposit_form.* and deposit_form.local.*
    #[arg(long, global = true, default_value = ".", env = "DEPOSIT_FORM_CONFIG_DIR")]
    pub config_dir: PathBuf,

    /// Do not load the built-in default layout
    #[arg(long, global = true)]
    pub no_builtins: bool,

    /// Do not load the per-user global configuration
    #[arg(long, global = true)]
    pub no_global: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved layout for a resource type
    ///
    /// Examples:
    ///   deposit-form resolve textDocument-journalArticle
    ///   deposit-form resolve dataset --json
    Resolve {
        /// Resource type key, e.g. textDocument-journalArticle
        resource_type: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Load the configuration and resolve every configured type
    Check,

    /// List configured resource types grouped by family
    ListTypes {
        /// Only show types of this family, e.g. textDocument
        #[arg(short, long)]
        family: Option<String>,
    },

    /// Print the JSON context embedded in the deposit page
    Context,

    /// Write the resolved layout for a resource type to a file
    ///
    /// The format follows the file extension: .toml, .json, .yaml or .yml.
    Export {
        /// Resource type key
        resource_type: String,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_takes_a_type_and_json_flag() {
        let cli = Cli::parse_from(["deposit-form", "resolve", "dataset", "--json"]);
        assert_eq!(
            cli.command,
            Some(Commands::Resolve {
                resource_type: "dataset".into(),
                json: true,
            })
        );
        assert_eq!(cli.config_dir, PathBuf::from("."));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "deposit-form",
            "check",
            "--config-dir",
            "/srv/forms",
            "--no-builtins",
            "-v",
        ]);
        assert_eq!(cli.command, Some(Commands::Check));
        assert_eq!(cli.config_dir, PathBuf::from("/srv/forms"));
        assert!(cli.no_builtins);
        assert!(!cli.no_global);
        assert!(cli.verbose);
    }

    #[test]
    fn export_requires_output() {
        assert!(Cli::try_parse_from(["deposit-form", "export", "dataset"]).is_err());

        let cli = Cli::parse_from(["deposit-form", "export", "dataset", "-o", "out.yaml"]);
        assert_eq!(
            cli.command,
            Some(Commands::Export {
                resource_type: "dataset".into(),
                output: PathBuf::from("out.yaml"),
            })
        );
    }

    #[test]
    fn list_types_family_filter() {
        let cli = Cli::parse_from(["deposit-form", "list-types", "--family", "textDocument"]);
        assert_eq!(
            cli.command,
            Some(Commands::ListTypes {
                family: Some("textDocument".into())
            })
        );
    }
}
