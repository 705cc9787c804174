mod cli;
mod commands;
mod config;
mod error;
mod page_range;
mod paging;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;
use config::Resolved;
use error::SelpgError;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("selpg: error: {:#}", err);
            let code = err
                .downcast_ref::<SelpgError>()
                .map_or(1, SelpgError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match config::resolve(cli).map_err(SelpgError::from)? {
        Resolved::Usage => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Resolved::Run(config) => config,
    };
    eprintln!("{}", config);

    commands::select::run(&config)?;
    Ok(())
}
