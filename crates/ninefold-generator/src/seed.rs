//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`PuzzleSeed`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("expected 64 hex characters, found {_0}")]
    WrongLength(#[error(not(source))] usize),
    /// The text contains a character that is not a hex digit.
    #[display("invalid hex character {_0:?} in seed")]
    InvalidHexDigit(#[error(not(source))] char),
}

/// A 32-byte seed that makes puzzle generation reproducible.
///
/// The seed round-trips through its 64-character lowercase hex form via
/// [`Display`] and [`FromStr`], so it can be logged next to a generated
/// puzzle and fed back in to regenerate the identical board/solution pair.
/// The RNG stream is derived by hashing the seed bytes with SHA-256, so
/// even low-entropy caller-supplied seeds spread over the whole state
/// space.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Derives the RNG stream for this seed.
    pub(crate) fn rng(&self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut state = [0_u8; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::WrongLength(len));
        }
        let mut bytes = [0_u8; 32];
        for (i, ch) in s.chars().enumerate() {
            let nibble = ch
                .to_digit(16)
                .ok_or(SeedParseError::InvalidHexDigit(ch))?;
            #[expect(clippy::cast_possible_truncation)]
            let nibble = nibble as u8;
            bytes[i / 2] = bytes[i / 2] << 4 | nibble;
        }
        Ok(Self(bytes))
    }
}
