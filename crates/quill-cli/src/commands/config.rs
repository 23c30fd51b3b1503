//! Config command handlers

use anyhow::Result;

use crate::config::Config;
use crate::output::{Output, OutputFormat};

/// Show the effective configuration
pub fn show(config: &Config, output: &Output) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "log_level": config.log_level,
                    "config_file": Config::config_file_path(),
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir:  {}", config.data_dir.display());
            println!("  log_level: {}", config.log_level);
            println!();
            println!("Config file: {}", Config::config_file_path().display());
        }
    }

    Ok(())
}
