use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// Errors returned when parsing a [`TileSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the input.
        len: usize,
    },
    /// The input contains a character that is not a hex digit.
    #[display("invalid hex digit at index {index}")]
    InvalidHexDigit {
        /// Index of the offending character.
        index: usize,
    },
}

/// A 256-bit seed for [`RandomTileGenerator`](crate::RandomTileGenerator).
///
/// Seeds are written as 64 lowercase hex digits, so a board that came from a
/// seeded generator can be reproduced from its printed seed.
///
/// # Examples
///
/// ```
/// use tumble_generator::TileSeed;
///
/// let seed: TileSeed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///     .parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
/// );
///
/// // Seeds can also be derived from any phrase
/// assert_eq!(TileSeed::from_phrase("level 1"), TileSeed::from_phrase("level 1"));
/// # Ok::<(), tumble_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSeed([u8; 32]);

impl TileSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a seed from the SHA-256 digest of `phrase`.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for TileSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for TileSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        let mut digits = s.char_indices().map(|(index, ch)| {
            ch.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(SeedParseError::InvalidHexDigit { index })
        });
        for byte in &mut bytes {
            // Length was checked above, so both digits are present.
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                return Err(SeedParseError::InvalidLength { len: s.len() });
            };
            *byte = (high? << 4) | low?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "abc".parse::<TileSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let mut s = "0".repeat(64);
        s.replace_range(10..11, "g");
        assert_eq!(
            s.parse::<TileSeed>(),
            Err(SeedParseError::InvalidHexDigit { index: 10 })
        );
        // Multi-byte characters count by bytes
        let s = format!("é{}", "0".repeat(62));
        assert!(s.parse::<TileSeed>().is_err());
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let upper = "AB".repeat(32);
        let seed = upper.parse::<TileSeed>().unwrap();
        assert_eq!(seed.as_bytes(), &[0xab; 32]);
        assert_eq!(seed.to_string(), "ab".repeat(32));
    }

    #[test]
    fn test_phrases_differ() {
        assert_ne!(TileSeed::from_phrase("a"), TileSeed::from_phrase("b"));
    }

    proptest! {
        #[test]
        fn display_parses_back(bytes in any::<[u8; 32]>()) {
            let seed = TileSeed::from_bytes(bytes);
            prop_assert_eq!(seed.to_string().parse::<TileSeed>(), Ok(seed));
        }
    }
}
