mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        match e.status() {
            Some(status) => eprintln!("Error ({}): {}", status, e),
            None => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("ringtrack CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::Summary(args) => {
            info!("Dispatching to 'summary' command.");
            commands::summary::run(args)
        }
        Commands::List(args) => {
            info!("Dispatching to 'list' command.");
            commands::list::run(args)
        }
        Commands::Find(args) => {
            info!("Dispatching to 'find' command.");
            commands::find::run(args)
        }
        Commands::Spos(args) => {
            info!("Dispatching to 'spos' command.");
            commands::spos::run(args)
        }
        Commands::Steps(args) => {
            info!("Dispatching to 'steps' command.");
            commands::steps::run(args)
        }
        Commands::Cavity(args) => {
            info!("Dispatching to 'cavity' command.");
            commands::cavity::run(args)
        }
        Commands::Report(args) => {
            info!("Dispatching to 'report' command.");
            commands::report::run(args, config_path)
        }
    };

    match &command_result {
        Ok(()) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}
