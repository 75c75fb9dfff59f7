use std::{fmt, num::ParseIntError, str::FromStr};

#[derive(thiserror::Error, Debug)]
pub(crate) enum LengthError {
    #[error("Invalid length {value:?}: {source}")]
    InvalidArgument {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Length {0} is too large for this platform")]
    TooLarge(i64),
}

/// Number of characters to generate, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Length(usize);

impl Length {
    pub(crate) const DEFAULT: Length = Length(32);

    /// Zero and negative requests fall back to [`Length::DEFAULT`].
    pub(crate) fn from_requested(requested: i64) -> Result<Self, LengthError> {
        if requested <= 0 {
            tracing::info!("Requested length {requested} is not positive, using the default");
            return Ok(Self::DEFAULT);
        }

        usize::try_from(requested)
            .map(Length)
            .map_err(|_| LengthError::TooLarge(requested))
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

impl FromStr for Length {
    type Err = LengthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let requested: i64 = value
            .trim()
            .parse()
            .map_err(|source| LengthError::InvalidArgument {
                value: value.to_owned(),
                source,
            })?;

        Self::from_requested(requested)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_lengths_are_kept() {
        assert_eq!(Length::from_requested(5).unwrap().get(), 5);
        assert_eq!(Length::from_requested(1).unwrap().get(), 1);
        assert_eq!(Length::from_requested(4096).unwrap().get(), 4096);
    }

    #[test]
    fn non_positive_lengths_use_default() {
        assert_eq!(Length::from_requested(0).unwrap(), Length::DEFAULT);
        assert_eq!(Length::from_requested(-10).unwrap(), Length::DEFAULT);
        assert_eq!(Length::from_requested(i64::MIN).unwrap(), Length::DEFAULT);
        assert_eq!(Length::DEFAULT.get(), 32);
    }

    #[test]
    fn parses_signed_and_padded_integers() {
        assert_eq!("7".parse::<Length>().unwrap().get(), 7);
        assert_eq!(" 12\n".parse::<Length>().unwrap().get(), 12);
        assert_eq!("+3".parse::<Length>().unwrap().get(), 3);
        assert_eq!("-1".parse::<Length>().unwrap(), Length::DEFAULT);
    }

    #[test]
    fn rejects_non_integers() {
        for value in ["abc", "", "1.5", "5x", "0x10"] {
            let error = value.parse::<Length>().unwrap_err();
            assert!(
                matches!(error, LengthError::InvalidArgument { .. }),
                "{value:?} gave {error:?}"
            );
        }
    }

    #[test]
    fn rejects_values_outside_i64() {
        let error = "99999999999999999999".parse::<Length>().unwrap_err();
        assert!(matches!(error, LengthError::InvalidArgument { .. }));
    }

    #[test]
    fn displays_as_number() {
        assert_eq!(Length::DEFAULT.to_string(), "32");
    }
}
