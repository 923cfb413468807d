mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::output::Renderer;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("nucleon CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let config = AppConfig::load(&cli)?;
    let renderer = Renderer::new(config.output);

    let command_result = match &cli.command {
        Commands::Inspect(args) => {
            info!("Dispatching to 'inspect' command.");
            commands::inspect::run(args).and_then(|report| renderer.render(&report))
        }
        Commands::Decay(args) => {
            info!("Dispatching to 'decay' command.");
            commands::decay::run(args).and_then(|output| renderer.render(&output))
        }
        Commands::Separation(args) => {
            info!("Dispatching to 'separation' command.");
            commands::separation::run(args).and_then(|output| renderer.render(&output))
        }
        Commands::Valley(args) => {
            info!("Dispatching to 'valley' command.");
            commands::valley::run(args, &config).and_then(|rows| renderer.render(rows.as_slice()))
        }
        Commands::Drip(args) => {
            info!("Dispatching to 'drip' command.");
            commands::drip::run(args).and_then(|output| renderer.render(&output))
        }
        Commands::Lookup(args) => {
            info!("Dispatching to 'lookup' command.");
            commands::lookup::run(args).and_then(|output| renderer.render(&output))
        }
        Commands::Curve(args) => {
            info!("Dispatching to 'curve' command.");
            commands::curve::run(args, &config)
                .and_then(|points| renderer.render(points.as_slice()))
        }
    };

    match command_result {
        Ok(rendered) => {
            println!("{}", rendered);
            info!("Command completed successfully.");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {}", e);
            Err(e)
        }
    }
}
