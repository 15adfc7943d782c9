//! Config command implementation.
//!
//! Prints the effective configuration as TOML, or writes it to a file so
//! it can be edited.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{AsmtError, Result};

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration to this path instead of printing it.
    pub write: Option<PathBuf>,
    /// Overwrite an existing file.
    pub force: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Run the config command.
pub fn run_config(args: ConfigArgs, config: &Config) -> Result<()> {
    match args.write {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(AsmtError::Validation(format!(
                    "Output file already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            config.save_to_path(&path)?;
            if args.verbose {
                eprintln!("Wrote configuration to {}", path.display());
            }
        },
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}
