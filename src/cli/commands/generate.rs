//! Generate command implementation

use crate::cli::utils;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("generate")
        .about("Generate the ClusterServiceVersion manifest")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory")
                .value_name("DIR"),
        )
        .arg(
            clap::Arg::new("created-at")
                .long("created-at")
                .help("Fixed createdAt timestamp (RFC 3339)")
                .value_name("TIMESTAMP"),
        )
        .arg(
            clap::Arg::new("stdout")
                .long("stdout")
                .help("Print the manifest instead of writing it")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("dry-run"),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Don't write files")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Starting ClusterServiceVersion generation");

    let mut config = utils::load_config(matches)?;

    // Override output path if specified
    if let Some(output_path) = matches.get_one::<String>("output") {
        config.output.base_path = PathBuf::from(output_path);
    }

    if let Some(created_at) = matches.get_one::<String>("created-at") {
        config.output.created_at = Some(parse_timestamp(created_at)?);
    }

    let app = utils::create_app(config)?;

    if matches.get_flag("stdout") {
        print!("{}", app.render_yaml()?);
        return Ok(());
    }

    if matches.get_flag("dry-run") {
        info!("Dry run mode - no files will be written");
        println!("Dry run mode - no files will be written");

        let result = app.dry_run().await?;

        println!("Dry run completed successfully!");
        println!("CSV: {}", result.csv_name);
        println!("Would write: {:?} ({} bytes)", result.output_path, result.bytes);
        println!("Cluster rules: {}", result.cluster_rules);
        println!("Role rules: {}", result.role_rules);
        println!("Related images: {}", result.related_images);
        return Ok(());
    }

    let result = app.generate().await?;

    println!("Generation completed successfully!");
    println!("CSV: {}", result.csv_name);
    println!("Written to: {:?} ({} bytes)", result.output_path, result.bytes);
    println!("Cluster rules: {}", result.cluster_rules);
    println!("Role rules: {}", result.role_rules);
    println!("Related images: {}", result.related_images);
    println!(
        "Processing time: {}",
        crate::utils::format_duration(std::time::Duration::from_millis(
            result.processing_time_ms
        ))
    );

    Ok(())
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| anyhow!("Invalid --created-at timestamp '{}': {}", value, e))
}
