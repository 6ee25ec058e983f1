//! Init command implementation

use crate::Config;
use anyhow::{anyhow, Result};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("init")
        .about("Initialize a new configuration file")
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file path")
                .value_name("FILE")
                .default_value(".olm-csvgen.yaml"),
        )
        .arg(
            clap::Arg::new("productized")
                .short('p')
                .long("productized")
                .help("Configure the productized (Fuse Online) target")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("force")
                .short('f')
                .long("force")
                .help("Overwrite an existing configuration file")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Output path is required"))?;

    if output_path.exists() && !matches.get_flag("force") {
        return Err(anyhow!(
            "{:?} already exists. Use --force to overwrite it",
            output_path
        ));
    }

    info!("Initializing configuration file: {:?}", output_path);

    let mut config = Config::default();
    config.operator.productized = matches.get_flag("productized");
    config.save_to_file(&output_path)?;

    info!("Configuration file created: {:?}", output_path);

    println!(
        "Configuration for the {} target created at {:?}.",
        if config.operator.productized {
            "productized"
        } else {
            "community"
        },
        output_path
    );
    println!("Relative template, asset and output paths resolve against the directory of this file.");
    println!("Edit the image references and operator version, then run 'olm-csvgen generate'.");

    Ok(())
}
