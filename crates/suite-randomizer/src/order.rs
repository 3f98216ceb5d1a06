use crate::error::{RandomizerError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Upper bound for freshly generated seeds (inclusive).
///
/// Keeps generated seeds in the non-negative 31-bit range so they are short
/// to copy and accepted by any host that stores seeds as signed 32-bit ints.
pub const MAX_GENERATED_SEED: u32 = i32::MAX as u32;

/// The order in which tests will be run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOrder {
    /// Tests run in the order the host discovered them.
    Normal,
    /// Tests are flattened and permuted by seed.
    #[default]
    Random,
}

impl RunOrder {
    /// Parses exactly `"normal"` or `"random"`. Anything else yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Random => "random",
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Self::Random)
    }
}

impl Display for RunOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seed for the test order generator.
///
/// Stored as the text it was resolved from, with surrounding whitespace
/// removed, so the report echoes what the user supplied. The text is only
/// interpreted as a number when the generator is seeded (see [`Seed::value`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    pub fn from_raw(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Draws a fresh seed from the thread-local RNG.
    pub fn generate() -> Self {
        let n = rand::thread_rng().gen_range(0..=MAX_GENERATED_SEED);
        Self::from(u64::from(n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric seed value. Fails for anything that is not a non-negative
    /// integer fitting in 64 bits.
    pub fn value(&self) -> Result<u64> {
        self.0
            .parse::<u64>()
            .map_err(|e| RandomizerError::invalid_seed(&self.0, e.to_string()))
    }
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
