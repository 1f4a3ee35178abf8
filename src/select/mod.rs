//! Subset selection.
//!
//! Drives the whole pipeline: enumerate subsets, resolve assignments,
//! filter by minimum group size, score, and keep the best under a
//! deterministic ordering.
//!
//! # Key Types
//!
//! - [`SelectConfig`]: Minimum group size, parallelism, report depth
//! - [`Selector`]: Runs the exhaustive search
//! - [`Outcome`]: The chosen subset and who goes where
//! - [`SelectionReport`]: Ranked outcomes plus search counts

mod config;
mod runner;
mod types;

pub use config::SelectConfig;
pub use runner::{Selector, PRACTICAL_CANDIDATE_LIMIT};
pub use types::{Group, Outcome, Placement, SelectionReport};
