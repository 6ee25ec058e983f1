//! olm-csvgen CLI binary

use anyhow::Result;

use olm_csvgen::cli::CliApp;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so `generate --stdout` output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "olm_csvgen=info".into()),
        )
        .init();

    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    // Run the CLI application
    CliApp::run(&matches).await
}
