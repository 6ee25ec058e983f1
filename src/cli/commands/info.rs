//! Info command implementation

use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("info").about("Show tool information").arg(
        clap::Arg::new("detailed")
            .short('d')
            .long("detailed")
            .help("Show detailed information")
            .action(clap::ArgAction::SetTrue),
    )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let detailed = matches.get_flag("detailed");

    println!("olm-csvgen - OLM ClusterServiceVersion Generator");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Repository: {}", env!("CARGO_PKG_REPOSITORY"));

    if detailed {
        println!("\nDetailed Information:");
        println!("  - Community (Syndesis) and productized (Fuse Online) targets");
        println!("  - RBAC rules rendered from the operator role templates");
        println!("  - Operator deployment rendered with configured component images");
        println!("  - Related images for disconnected installs");
        println!("  - Reproducible output with a pinned createdAt timestamp");
        println!("\nTemplates:");
        println!("  - {}", crate::install::ROLE_TEMPLATE);
        for template in crate::install::CLUSTER_ROLE_TEMPLATES {
            println!("  - {template}");
        }
        println!("  - {}", crate::install::DEPLOYMENT_TEMPLATE);
    }

    Ok(())
}
