//! Seed reporting.
//!
//! The human-readable line goes to stdout after the suite finishes so the seed
//! can be copied into `SEED=` for a later run. [`SeedReport`] is the same
//! information as a JSON record for hosts that collect machine-readable output.

use crate::config::{RandomizerConfig, SEED_ENV};
use crate::error::Result;
use crate::order::{RunOrder, Seed};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Text preceding the seed in the report line.
pub const SEED_REPORT_PREFIX: &str = "Randomized test order using seed";

/// Format the report block for `seed`: two blank lines, then the seed line.
#[must_use]
pub fn format_seed_report(seed: &Seed) -> String {
    format!("\n\n{} {}\n", SEED_REPORT_PREFIX, seed)
}

/// Writes the seed report if the run was randomized. Returns whether anything
/// was written.
pub fn write_seed_report<W: Write>(out: &mut W, cfg: &RandomizerConfig) -> Result<bool> {
    let Some(seed) = cfg.seed() else {
        return Ok(false);
    };
    out.write_all(format_seed_report(seed).as_bytes())?;
    out.flush()?;
    Ok(true)
}

/// Machine-readable seed record. The seed is kept as a string so that values
/// above 2^53 survive JSON consumers that parse numbers as doubles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub order: RunOrder,
    pub seed: Option<Seed>,
    /// Environment assignment that reproduces this order, e.g. `SEED=42`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reproduce: Option<String>,
}

impl SeedReport {
    pub fn from_config(cfg: &RandomizerConfig) -> Self {
        Self {
            order: cfg.order(),
            seed: cfg.seed().cloned(),
            reproduce: cfg.seed().map(|s| format!("{}={}", SEED_ENV, s)),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
