//! Asmt CLI - A command-line tool for scanning assembly source.
//!
//! This is the main entry point for the asmt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat, run_check, run_config, run_tokens, CheckArgs, ConfigArgs, TokensArgs,
};
use config::Config;
use error::{AsmtError, Result};

/// Asmt - A CLI tool for scanning assembly source
///
/// Asmt lists the tokens of assembly source files and checks them for
/// lexical errors.
#[derive(Parser, Debug)]
#[command(name = "asmt")]
#[command(author = "Asmc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for scanning assembly source", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ASMT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ASMT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ASMT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the asmt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of each file
    ///
    /// Prints every token the scanner produced, ending with EOF or the
    /// error token that halted the scan.
    Tokens(TokensCommand),

    /// Check files for lexical errors
    ///
    /// Scans files in parallel and reports the first lexical error of each
    /// failing file with its location.
    Check(CheckCommand),

    /// Print or write the effective configuration
    Config(ConfigCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Listing format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<u32>,

    /// Don't print source snippets under diagnostics
    #[arg(long)]
    no_snippets: bool,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to a file instead of printing it
    #[arg(short, long)]
    write: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the asmt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let (config, config_path) = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    match &config_path {
        Some(path) => debug!(path = %path.display(), "loaded configuration"),
        None => debug!("no configuration file found, using defaults"),
    }

    // Execute the selected command
    let verbose = cli.verbose || config.verbose;
    let color = !cli.no_color && config.output.color && std::io::stdout().is_terminal();
    execute_command(cli.command, verbose, color, config)
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| AsmtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Returns the file the configuration came from, if any.
fn load_config(config_path: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    let path = config_path
        .map(Path::to_path_buf)
        .or_else(Config::find_config_file);
    match path {
        Some(path) => Ok((Config::load_from_path(&path)?, Some(path))),
        None => Ok((Config::default(), None)),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, &config),
        Commands::Check(args) => execute_check(args, verbose, color, &config),
        Commands::Config(args) => execute_config(args, verbose, &config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: &Config) -> Result<()> {
    let tokens_args = TokensArgs {
        files: args.files,
        format: args.format.unwrap_or(config.output.format),
        verbose,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, color: bool, config: &Config) -> Result<()> {
    let check_args = CheckArgs {
        files: args.files,
        jobs: args.jobs.unwrap_or(config.check.jobs) as usize,
        snippets: config.check.snippets && !args.no_snippets,
        color,
        verbose,
    };
    run_check(check_args)
}

/// Execute the config command.
fn execute_config(args: ConfigCommand, verbose: bool, config: &Config) -> Result<()> {
    let config_args = ConfigArgs {
        write: args.write,
        force: args.force,
        verbose,
    };
    run_config(config_args, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["asmt", "tokens", "hello.asm"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("hello.asm")]);
            assert_eq!(args.format, None);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_format() {
        let cli = Cli::parse_from(["asmt", "tokens", "a.asm", "b.asm", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_rejects_unknown_format() {
        let result = Cli::try_parse_from(["asmt", "tokens", "a.asm", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_tokens_requires_files() {
        let result = Cli::try_parse_from(["asmt", "tokens"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["asmt", "check", "a.asm", "--jobs", "3", "--no-snippets"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("a.asm")]);
            assert_eq!(args.jobs, Some(3));
            assert!(args.no_snippets);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_config_write() {
        let cli = Cli::parse_from(["asmt", "config", "--write", "asmt.toml", "--force"]);
        if let Commands::Config(args) = cli.command {
            assert_eq!(args.write, Some(PathBuf::from("asmt.toml")));
            assert!(args.force);
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["asmt", "--verbose", "config"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["asmt", "--config", "/path/to/asmt.toml", "config"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/asmt.toml")));
    }

    #[test]
    fn test_load_config_reports_source_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("asmt.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();

        let (config, source) = load_config(Some(&path)).unwrap();
        assert!(config.verbose);
        assert_eq!(source, Some(path));
    }

    #[test]
    fn test_load_config_missing_explicit_path() {
        let result = load_config(Some(Path::new("/nonexistent/asmt.toml")));
        assert!(matches!(result, Err(AsmtError::Config(_))));
    }

    #[test]
    fn test_cli_parse_global_no_color_after_subcommand() {
        let cli = Cli::parse_from(["asmt", "check", "a.asm", "--no-color"]);
        assert!(cli.no_color);
    }
}
