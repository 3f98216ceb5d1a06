//! Error types for the suite randomizer.

/// Randomizer errors.
///
/// None of these are recovered internally. A failure aborts the suite-start
/// hook before any ordering is applied, so a suite is never left partially
/// randomized.
#[derive(Debug, thiserror::Error)]
pub enum RandomizerError {
    /// Seed override cannot be used to seed the generator.
    #[error("invalid seed {raw:?}: {reason}")]
    InvalidSeed { raw: String, reason: String },

    /// The suite-start hook was handed a single test instead of a suite.
    #[error("expected a test suite at the root, found a single test")]
    NotASuite,

    /// Writing the seed report failed.
    #[error("failed to write seed report: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the seed record failed.
    #[error("failed to encode seed record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RandomizerError {
    pub fn invalid_seed(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSeed {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Exit code for hosts that turn a randomizer failure into a process exit.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Bad configuration or precondition violations
            Self::InvalidSeed { .. } => 2,
            Self::NotASuite => 2,
            // Output problems
            Self::Io(_) => 3,
            Self::Serialize(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RandomizerError>;
