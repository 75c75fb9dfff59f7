use clap::{
    builder::FalseyValueParser, error::ErrorKind, ArgAction, CommandFactory, Parser,
};

use crate::{generator::Source, length::Length};

/// Generate a random string of letters, digits and punctuation and print it with its base64 encoding.
#[derive(Parser, Debug)]
#[command(name = "create-secret", version, about, long_about = None)]
pub(crate) struct Cli {
    /// Number of characters to generate, zero or negative values generate 32
    #[arg(allow_negative_numbers = true)]
    pub(crate) length: Length,
    /// Seed for reproducible output
    #[arg(long, env = "CREATE_SECRET_SEED")]
    seed: Option<u64>,
    /// Use a cryptographically secure random number generator
    #[arg(
        long,
        env = "CREATE_SECRET_SECURE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    secure: bool,
}

impl Cli {
    /// A secure run cannot be seeded. Only an enabled `--secure` conflicts, a falsey
    /// `CREATE_SECRET_SECURE` does not.
    pub(crate) fn validate(&self) -> Result<(), clap::Error> {
        if self.secure && self.seed.is_some() {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "the argument '--secure' cannot be used with '--seed <SEED>'",
            ));
        }

        Ok(())
    }

    pub(crate) fn source(&self) -> Source {
        match (self.secure, self.seed) {
            (true, _) => Source::Secure,
            (false, Some(seed)) => Source::Seeded(seed),
            (false, None) => Source::Pseudo,
        }
    }
}
