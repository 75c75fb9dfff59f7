mod alphabet;
mod cli;
mod generator;
mod length;
mod logging;
mod secret;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;

use crate::{
    cli::Cli,
    generator::{generate, SeedError},
    secret::Secret,
};

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error("Error writing secret to standard output: {0}")]
    Output(#[from] io::Error),
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut rng = cli.source().into_rng()?;
    tracing::debug!("Generating secret of length {}", cli.length);
    let secret = Secret::new(cli.length, generate(&mut *rng, cli.length));

    let mut stdout = io::stdout().lock();
    write!(stdout, "{secret}")?;
    stdout.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let cli = Cli::parse();
    if let Err(error) = cli.validate() {
        error.exit();
    }
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{}", error);
            ExitCode::FAILURE
        }
    }
}
