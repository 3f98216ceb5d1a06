//! Reproducible randomized test ordering.
//!
//! Running tests in a non-default order exposes hidden dependencies between
//! them. This crate provides a suite listener that, when a suite starts,
//! flattens any nested suites into one list and permutes it with a seeded
//! generator, then prints the seed when the suite finishes so a failing order
//! can be replayed exactly.
//!
//! - Run order resolution from a default plus `ORDER` / `SEED` overrides
//! - Depth-first flattening of nested suites
//! - Seeded key-sort permutation (ChaCha8, stable sort)
//! - Seed report on stdout, plus a JSON record
//!
//! # Quick Start
//!
//! ```
//! use suite_randomizer::{RandomizerConfig, SuiteListener, TestNode, TestSuite, TestSuiteListener};
//!
//! # fn example() -> suite_randomizer::Result<()> {
//! let listener = TestSuiteListener::from_config(RandomizerConfig::seeded(42u64));
//!
//! let mut root = TestNode::suite(TestSuite::new("all").with_tests([
//!     TestNode::test("parses_header"),
//!     TestNode::suite(TestSuite::new("io").with_tests([
//!         TestNode::test("reads_file"),
//!         TestNode::test("writes_file"),
//!     ])),
//! ]));
//!
//! listener.start_test_suite(&mut root)?;
//! assert_eq!(root.as_suite().map(|s| s.tests().len()), Some(3));
//! // ... host runs the tests ...
//! listener.end_test_suite(&root)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `ORDER` | `normal` or `random`; other values are ignored |
//! | `SEED` | Seed to replay; forces random order |

pub mod config;
pub mod error;
pub mod listener;
pub mod order;
pub mod report;
pub mod shuffle;
pub mod suite;

pub use config::{Overrides, RandomizerConfig, ORDER_ENV, SEED_ENV};
pub use error::{RandomizerError, Result};
pub use listener::{SuiteListener, TestSuiteListener};
pub use order::{RunOrder, Seed};
pub use report::{format_seed_report, SeedReport};
pub use shuffle::{shuffle_tests, Shuffler};
pub use suite::{flatten, TestNode, TestSuite};
