//! Validate command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::info;

pub fn command() -> Command {
    Command::new("validate")
        .about("Validate configuration file")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Validating configuration file");

    let config = utils::load_config(matches)?;
    let branding = crate::Branding::for_target(config.operator.productized);

    println!("Configuration file is valid!");
    println!("Version: {}", config.version);
    println!("Target: {} ({})", branding.target(), branding.display_name);
    println!("CSV: {}", branding.csv_name(&config.operator.version));
    println!("Operator image: {}", config.operator.image);
    println!("Templates: {:?}", config.paths.templates);
    println!("Assets: {:?}", config.paths.assets);
    println!("Output path: {:?}", config.output.base_path);

    println!("Related images:");
    for image in config
        .syndesis
        .related_images(&config.operator.image)
        .to_images()
    {
        println!("  - {}: {}", image.name, image.image);
    }

    Ok(())
}
