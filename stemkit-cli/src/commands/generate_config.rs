//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::ConfigError(format!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            ))
            .into());
        }

        fs::write(&self.output, CliConfig::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!("   stemkit stem -i words.txt -c {}", self.output.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_loadable_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stemkit.toml");
        let args = GenerateConfigArgs {
            output: path.clone(),
            force: false,
        };
        args.execute().unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stemkit.toml");
        fs::write(&path, "keep me").unwrap();

        let args = GenerateConfigArgs {
            output: path.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        let forced = GenerateConfigArgs {
            output: path.clone(),
            force: true,
        };
        forced.execute().unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[stemming]"));
    }
}
