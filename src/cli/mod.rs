//! CLI interface and argument parsing
//!
//! This module provides the command-line interface of the `cmis` binary using
//! clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// cmis - CMIS AtomPub client tooling
#[derive(Parser, Debug)]
#[command(name = "cmis")]
#[command(version, about, long_about = None)]
#[command(author = "CMIS Client Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cmis.toml", env = "CMIS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CMIS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Fill a URI template with percent-encoded values
    FillTemplate(commands::template::FillTemplateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["cmis", "validate-config"]);
        assert_eq!(cli.config, "cmis.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["cmis", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["cmis", "--log-level", "debug", "init"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_fill_template() {
        let cli = Cli::parse_from([
            "cmis",
            "fill-template",
            "--template",
            "http://x/{id}",
            "--value",
            "id=a b",
            "--value",
            "filter=*",
        ]);
        match cli.command {
            Commands::FillTemplate(args) => {
                assert_eq!(args.template, "http://x/{id}");
                assert_eq!(args.values, vec!["id=a b", "filter=*"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["cmis", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }
}
