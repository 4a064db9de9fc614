//! validate-contentstore - audit a repository content store
//!
//! Reads every content URL from the repository database, checks the
//! matching file in the content store and prints what is missing or has
//! the wrong size.

mod cli;
mod display;
mod error;
mod logging;

use crate::cli::Cli;
use crate::display::ReportRenderer;
use crate::error::CliError;
use clap::Parser;
use cstore_guard::ContentValidator;
use cstore_state::PostgresCatalog;
use std::process;
use tracing::{debug, error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    logging::init_tracing(json_mode, cli.debug);

    // Findings are reported, not signalled: only fatal errors exit non-zero.
    if let Err(e) = run(cli).await {
        if json_mode {
            error!(error = %e, "Application error");
        } else {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting validate-contentstore v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.to_config();
    config.validate()?;
    debug!(
        database = ?config.database,
        content_store = %config.content_store.display(),
        "configuration"
    );

    let conn = cstore_state::connect(&config.database).await?;
    let catalog = PostgresCatalog::new(conn);

    let result = ContentValidator::new(&catalog, &config.content_store)
        .run()
        .await;
    catalog.close().await;
    let report = result?;

    let renderer = ReportRenderer::new(cli.json);
    let stdout = std::io::stdout();
    renderer.render(&report, &mut stdout.lock())?;

    info!(clean = report.is_clean(), "Validation completed");
    Ok(())
}
