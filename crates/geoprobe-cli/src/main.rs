//! Command-line interface for `GeoProbe`, an environment probe for geospatial images.
//!
//! This binary reports what the [`geoprobe_core`] library finds in the running
//! environment: the GDAL version, how many format drivers GDAL has registered, and
//! whether the optional `esa_snappy` module (ESA SNAP bindings) can be imported.
//!
//! # Architecture
//!
//! The CLI is built using [`clap`] for argument parsing and [`tracing`] for structured logging.
//! It parses arguments, configures logging, and delegates to command handlers. Logs go
//! to standard error so that standard output carries only the report.
//!
//! # Available Commands
//!
//! - `report` - Print the three-line environment report (default)
//! - `drivers` - List every registered GDAL driver

mod display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, debug, info, warn};
use tracing_log::LogTracer;
use tracing_subscriber::FmtSubscriber;

use geoprobe_core::module_probe::DEFAULT_INTERPRETER;
use geoprobe_core::{EnvironmentReport, PythonModuleProbe, RasterLibrary, default_library};

#[derive(Parser)]
#[command(
    name = "geoprobe",
    version,
    about = "Report the geospatial tooling available in this environment",
    long_about = "GeoProbe prints the GDAL version, the number of registered GDAL drivers\n\
                  and whether the esa_snappy module for ESA SNAP can be imported."
)]
/// Command-line arguments and options for the `GeoProbe` CLI.
struct Cli {
    /// Enable verbose (INFO level) logging output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug (DEBUG level) logging output with detailed diagnostics.
    #[arg(short, long, global = true)]
    debug: bool,

    /// Python interpreter used to test whether `esa_snappy` can be imported.
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_INTERPRETER)]
    python: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the `GeoProbe` CLI.
#[derive(Subcommand)]
enum Commands {
    /// Prints the GDAL version, driver count and SNAP availability (default).
    Report,

    /// Lists all drivers registered in GDAL and the kinds of data they handle.
    Drivers,
}

/// Entry point for the `GeoProbe` command-line interface.
///
/// # Errors
///
/// Returns an error if GDAL is unavailable, if a GDAL query fails, or if the
/// logging system cannot be initialized.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity flags
    let log_level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    // Bridge logs from the `log` crate to the `tracing` ecosystem.
    LogTracer::init()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true) // Show module paths for better context
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let library = load_library()?;

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => {
            info!("Probing environment");
            handle_report(library.as_ref(), &PythonModuleProbe::new(&cli.python))?;
        },
        Commands::Drivers => {
            handle_drivers(library.as_ref())?;
        },
    }

    Ok(())
}

/// Loads the mandatory raster library, logging how to recover if it is missing.
fn load_library() -> Result<Box<dyn RasterLibrary>> {
    default_library().map_err(|e| {
        warn!("{}", e.user_message());
        if let Some(suggestion) = e.recovery_suggestion() {
            warn!("{suggestion}");
        }
        anyhow::Error::from(e)
    })
}

fn handle_report(library: &dyn RasterLibrary, probe: &PythonModuleProbe) -> Result<()> {
    debug!("Module probe interpreter: {:?}", probe.interpreter());
    let report = EnvironmentReport::collect(library, probe)?;
    report.write_to(std::io::stdout().lock())?;
    Ok(())
}

/// Handles the `drivers` subcommand by displaying a formatted table of registered drivers.
///
/// # Errors
///
/// Returns an error if a driver cannot be looked up in GDAL.
fn handle_drivers(library: &dyn RasterLibrary) -> Result<()> {
    let drivers = library.drivers()?;
    display::display_drivers(&drivers);
    Ok(())
}
