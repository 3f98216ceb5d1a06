//! Suite lifecycle hooks.
//!
//! The host framework builds one [`TestSuiteListener`] per process and calls
//! [`SuiteListener::start_test_suite`] before any test in a top-level suite
//! runs and [`SuiteListener::end_test_suite`] after the last one finishes.

use crate::config::{Overrides, RandomizerConfig};
use crate::error::{RandomizerError, Result};
use crate::order::RunOrder;
use crate::report::write_seed_report;
use crate::shuffle::Shuffler;
use crate::suite::{flatten_owned, TestNode, TestSuite};
use std::io::Write;

/// Hooks the host invokes around a suite run.
pub trait SuiteListener<T> {
    /// Called before the suite's first test. May reorder the suite.
    fn start_test_suite(&self, suite: &mut TestNode<T>) -> Result<()>;

    /// Called after the suite's last test.
    fn end_test_suite(&self, suite: &TestNode<T>) -> Result<()>;
}

/// Flattens suites and randomizes test order at suite start; reports the seed
/// at suite end.
#[derive(Debug, Clone)]
pub struct TestSuiteListener {
    config: RandomizerConfig,
}

impl TestSuiteListener {
    /// Resolves the configuration from `ORDER` / `SEED` in the environment,
    /// falling back to `default_order`.
    pub fn new(default_order: RunOrder) -> Self {
        Self::from_config(RandomizerConfig::from_env(default_order))
    }

    pub fn with_overrides(default_order: RunOrder, overrides: &Overrides) -> Self {
        Self::from_config(RandomizerConfig::resolve(default_order, overrides))
    }

    pub fn from_config(config: RandomizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RandomizerConfig {
        &self.config
    }

    /// Replaces the suite's children with all of its leaf tests, flattened and
    /// permuted by the configured seed. No-op in normal order.
    ///
    /// The seed is validated before the suite is touched, so on error the
    /// suite is left exactly as it was.
    pub fn randomize<T>(&self, suite: &mut TestSuite<T>) -> Result<()> {
        let Some(seed) = self.config.seed() else {
            return Ok(());
        };
        let shuffler = Shuffler::from_seed(seed)?;

        let mut tests = Vec::with_capacity(suite.count());
        flatten_owned(suite.take_tests(), &mut tests);
        tracing::debug!(suite = suite.name(), tests = tests.len(), "flattened suite");

        let total = tests.len();
        let shuffled = shuffler.shuffle(tests);
        suite.set_tests(shuffled.into_iter().map(TestNode::Test).collect());

        tracing::info!(
            suite = suite.name(),
            seed = %seed,
            tests = total,
            "randomized test order"
        );
        Ok(())
    }

    /// Writes the seed report to `out`. Returns whether anything was written.
    pub fn end_test_suite_to<W: Write>(&self, out: &mut W) -> Result<bool> {
        write_seed_report(out, &self.config)
    }
}

impl Default for TestSuiteListener {
    fn default() -> Self {
        Self::new(RunOrder::default())
    }
}

impl<T> SuiteListener<T> for TestSuiteListener {
    fn start_test_suite(&self, suite: &mut TestNode<T>) -> Result<()> {
        let suite = suite.as_suite_mut().ok_or(RandomizerError::NotASuite)?;
        self.randomize(suite)
    }

    fn end_test_suite(&self, _suite: &TestNode<T>) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.end_test_suite_to(&mut out)?;
        Ok(())
    }
}
