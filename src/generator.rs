use rand::{
    rngs::{SmallRng, StdRng},
    Rng, RngCore, SeedableRng,
};

use crate::{alphabet::ALPHABET, length::Length};

#[derive(thiserror::Error, Debug)]
#[error("Error gathering seed material from the operating system: {0}")]
pub(crate) struct SeedError(#[from] getrandom::Error);

/// Where the randomness for a secret comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    /// Fast non-cryptographic generator seeded from the operating system.
    Pseudo,
    /// Non-cryptographic generator with a fixed seed, for reproducible output.
    Seeded(u64),
    /// Cryptographically secure generator seeded from the operating system.
    Secure,
}

impl Source {
    pub(crate) fn into_rng(self) -> Result<Box<dyn RngCore>, SeedError> {
        tracing::debug!("Using random source {:?}", self);
        let rng: Box<dyn RngCore> = match self {
            Source::Pseudo => {
                let mut seed = [0; 8];
                getrandom::getrandom(&mut seed)?;
                Box::new(SmallRng::seed_from_u64(u64::from_le_bytes(seed)))
            }
            Source::Seeded(seed) => Box::new(SmallRng::seed_from_u64(seed)),
            Source::Secure => {
                let mut seed = [0; 32];
                getrandom::getrandom(&mut seed)?;
                Box::new(StdRng::from_seed(seed))
            }
        };

        Ok(rng)
    }
}

/// Draws every character independently and uniformly from [`ALPHABET`].
pub(crate) fn generate<R: Rng + ?Sized>(rng: &mut R, length: Length) -> String {
    (0..length.get())
        .map(|_| {
            let index = rng.random_range(0..ALPHABET.len());
            ALPHABET[index] as char
        })
        .collect()
}
