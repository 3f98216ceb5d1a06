//! Run order resolution.
//!
//! The final [`RandomizerConfig`] is decided once, from three sources in
//! priority order: a seed override, an order override, and the default order
//! the host passes when constructing the listener.

use crate::order::{RunOrder, Seed};
use serde::Serialize;

/// Environment variable selecting the run order (`normal` or `random`).
pub const ORDER_ENV: &str = "ORDER";
/// Environment variable fixing the seed. Setting it forces random order.
pub const SEED_ENV: &str = "SEED";

/// External overrides for the run order and seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub order: Option<String>,
    pub seed: Option<String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `ORDER` and `SEED` from the process environment. A variable that
    /// is set counts as present even when empty or not valid unicode; such a
    /// `SEED` still forces random order and fails when the suite starts.
    pub fn from_env() -> Self {
        Self {
            order: read_env(ORDER_ENV),
            seed: read_env(SEED_ENV),
        }
    }

    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
}

/// Resolved run order and seed. Immutable once built.
///
/// Invariant: `seed` is present if and only if `order` is [`RunOrder::Random`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomizerConfig {
    order: RunOrder,
    seed: Option<Seed>,
}

impl RandomizerConfig {
    /// Resolves the configuration.
    ///
    /// 1. A recognized order override replaces `default_order`; anything else
    ///    is ignored.
    /// 2. A seed override forces random order and is kept as given, minus
    ///    surrounding whitespace.
    /// 3. Otherwise random order gets a freshly generated seed.
    pub fn resolve(default_order: RunOrder, overrides: &Overrides) -> Self {
        let mut order = default_order;
        if let Some(raw) = overrides.order.as_deref() {
            match RunOrder::parse(raw) {
                Some(parsed) => order = parsed,
                None => {
                    tracing::debug!(value = raw, "ignoring unrecognized {} override", ORDER_ENV)
                }
            }
        }

        let seed = match overrides.seed.as_deref() {
            Some(raw) => {
                order = RunOrder::Random;
                Some(Seed::from_raw(raw))
            }
            None if order.is_random() => Some(Seed::generate()),
            None => None,
        };

        tracing::debug!(
            order = %order,
            seed = seed.as_ref().map(Seed::as_str),
            "resolved test order"
        );
        Self { order, seed }
    }

    /// Resolves against the process environment.
    pub fn from_env(default_order: RunOrder) -> Self {
        Self::resolve(default_order, &Overrides::from_env())
    }

    /// Normal order, no seed.
    pub fn normal() -> Self {
        Self {
            order: RunOrder::Normal,
            seed: None,
        }
    }

    /// Random order with a fixed seed.
    pub fn seeded(seed: impl Into<Seed>) -> Self {
        Self {
            order: RunOrder::Random,
            seed: Some(seed.into()),
        }
    }

    pub fn order(&self) -> RunOrder {
        self.order
    }

    pub fn seed(&self) -> Option<&Seed> {
        self.seed.as_ref()
    }

    pub fn is_random(&self) -> bool {
        self.order.is_random()
    }
}
