//! Command-line front end: load a catalog, check out a list, print the receipt.

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use grocery_checkout::{Catalog, InventoryError, InventoryResult};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let InventoryError::FileOpen { .. } = err {
                eprintln!("{err}, cowardly refusing to continue");
            } else {
                eprintln!("error: {err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> InventoryResult<()> {
    let mut catalog = Catalog::in_memory();
    catalog.use_tax_rate(cli.tax_rate.clone());
    catalog.set_checkout_policy(cli.policy());

    let summary = catalog.load_from_file(&cli.catalog)?;
    debug!(?summary, "catalog ready");

    let receipt = catalog.checkout(&cli.checkout)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&receipt)
            .map_err(|err| InventoryError::Io(err.into()))?;
        println!("{json}");
    } else {
        println!("{receipt}");
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so receipt output on stdout stays clean. `RUST_LOG`
/// overrides the default filter.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,grocery_checkout=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
