//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("olm-csvgen")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Generate OLM ClusterServiceVersion manifests for the Syndesis operator")
            .subcommand_negates_reqs(true)
            .subcommand(commands::init::command())
            .subcommand(commands::generate::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("init", sub_matches)) => commands::init::run(sub_matches).await,
            Some(("generate", sub_matches)) => commands::generate::run(sub_matches).await,
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use std::path::{Path, PathBuf};

    pub const DEFAULT_CONFIG_FILES: [&str; 4] = [
        ".olm-csvgen.yaml",
        ".olm-csvgen.yml",
        "olm-csvgen.yaml",
        "olm-csvgen.yml",
    ];

    /// Get configuration file path from arguments or use default
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Ok(PathBuf::from(config_path));
        }

        for name in DEFAULT_CONFIG_FILES {
            let path = PathBuf::from(name);
            if path.exists() {
                return Ok(path);
            }
        }

        // Fall back to the user-wide configuration
        if let Ok(config_dir) = crate::utils::get_config_dir() {
            let path = config_dir.join("config.yaml");
            if path.exists() {
                return Ok(path);
            }
        }

        Err(anyhow!("No configuration file found. Use --config to specify a file or create one with 'olm-csvgen init'"))
    }

    /// Load configuration from file. Relative paths inside it are taken
    /// from the file's directory.
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        let config_path = get_config_path(matches)?;
        let mut config = crate::Config::from_file(&config_path)?;

        let base_dir = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        config.resolve_paths(base_dir)?;
        Ok(config)
    }

    /// Create CsvGen instance
    pub fn create_app(config: crate::Config) -> Result<crate::CsvGen> {
        crate::CsvGen::new(config)
    }
}
