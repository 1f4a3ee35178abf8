//! Exhaustive selection engine.
//!
//! # Algorithm
//!
//! 1. Enumerate every non-empty subset of the candidate universe
//! 2. For each subset:
//!    a. Resolve each participant to their best-ranked member
//!    b. Discard the subset if any member has fewer than
//!       `min_group_size` participants
//!    c. Otherwise score it by the root-mean-square of participant scores
//! 3. Keep the best `top_k` valid subsets under the ordering below
//!
//! # Ordering
//!
//! Subsets are ordered by penalty, then by number of candidates (fewer
//! first), then by their candidate names sorted ascending and compared as
//! sequences. Penalties are compared through the exact sum of squared
//! scores, so equal penalties never diverge by rounding. The ordering is
//! total, which makes sequential and parallel runs return the same result.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::SelectConfig;
use super::types::{Outcome, SelectionReport};
use crate::assignment::resolve;
use crate::error::{Result, SelectError};
use crate::evaluate::{evaluate, Scored};
use crate::preference::PreferenceModel;
use crate::subset::{Subset, SubsetEnumerator, Subsets};

/// Universe size above which a run logs a warning. Larger universes still
/// run, but the `2^n` search is not expected to be quick.
pub const PRACTICAL_CANDIDATE_LIMIT: usize = 24;

/// Subsets handed to one rayon task.
#[cfg(feature = "parallel")]
const CHUNK_SIZE: u64 = 1 << 10;

/// Runs the exhaustive subset search.
///
/// # Examples
///
/// ```
/// use u_groupselect::preference::PreferenceModel;
/// use u_groupselect::select::{SelectConfig, Selector};
///
/// let model = PreferenceModel::new(
///     ["A", "B"],
///     [("p1", ["A", "B"]), ("p2", ["B", "A"])],
/// )
/// .unwrap();
/// let config = SelectConfig::default().with_min_group_size(1);
///
/// let outcome = Selector::select(&model, &config).unwrap();
/// assert_eq!(outcome.candidates, vec!["A", "B"]);
/// assert_eq!(outcome.penalty, 1.0);
/// ```
pub struct Selector;

impl Selector {
    /// Returns the single best selection.
    pub fn select(model: &PreferenceModel, config: &SelectConfig) -> Result<Outcome> {
        let config = SelectConfig {
            top_k: 1,
            ..config.clone()
        };
        let mut report = Self::rank(model, &config)?;
        Ok(report.ranked.swap_remove(0))
    }

    /// Returns the best `config.top_k` selections with run statistics.
    ///
    /// Fails with [`SelectError::NoFeasibleSelection`] when no subset meets
    /// the minimum group size.
    pub fn rank(model: &PreferenceModel, config: &SelectConfig) -> Result<SelectionReport> {
        config.validate()?;

        let n = model.candidate_count();
        let subsets = SubsetEnumerator::new(n);
        if n > PRACTICAL_CANDIDATE_LIMIT {
            warn!(
                candidates = n,
                limit = PRACTICAL_CANDIDATE_LIMIT,
                "exhaustive search over a large candidate set"
            );
        }
        debug!(
            candidates = n,
            participants = model.participant_count(),
            subsets = subsets.len(),
            min_group_size = config.min_group_size,
            "starting selection"
        );

        let tally = search(model, config, &subsets);

        info!(
            considered = tally.considered,
            filtered = tally.considered - tally.valid,
            valid = tally.valid,
            "selection finished"
        );

        if tally.best.is_empty() {
            return Err(SelectError::NoFeasibleSelection {
                min_group_size: config.min_group_size,
                participants: model.participant_count(),
            });
        }

        Ok(SelectionReport {
            ranked: tally
                .best
                .iter()
                .map(|scored| Outcome::from_scored(model, scored))
                .collect(),
            considered: tally.considered,
            valid: tally.valid,
        })
    }
}

#[cfg(feature = "parallel")]
fn search(model: &PreferenceModel, config: &SelectConfig, subsets: &SubsetEnumerator) -> Tally {
    if !config.parallel {
        return Tally::scan(model, config, subsets.iter());
    }
    let chunks = subsets.len() / CHUNK_SIZE + 1;
    (0..chunks)
        .into_par_iter()
        .map(|i| {
            Tally::scan(
                model,
                config,
                subsets.range(i * CHUNK_SIZE, (i + 1) * CHUNK_SIZE),
            )
        })
        .reduce(Tally::default, |a, b| a.merge(b, model, config.top_k))
}

#[cfg(not(feature = "parallel"))]
fn search(model: &PreferenceModel, config: &SelectConfig, subsets: &SubsetEnumerator) -> Tally {
    Tally::scan(model, config, subsets.iter())
}

/// Running counts and the best valid subsets seen so far, best first.
#[derive(Debug, Default)]
struct Tally {
    considered: u64,
    valid: u64,
    best: Vec<Scored>,
}

impl Tally {
    fn scan(model: &PreferenceModel, config: &SelectConfig, subsets: Subsets) -> Self {
        let mut tally = Self::default();
        for subset in subsets {
            tally.considered += 1;
            let evaluation = evaluate(resolve(model, subset), config.min_group_size);
            if let Some(scored) = evaluation.into_valid() {
                tally.valid += 1;
                tally.offer(model, scored, config.top_k);
            }
        }
        tally
    }

    fn offer(&mut self, model: &PreferenceModel, scored: Scored, keep: usize) {
        if self.best.len() >= keep {
            match self.best.last() {
                Some(worst) if compare(model, &scored, worst) != Ordering::Less => return,
                _ => {}
            }
        }
        let pos = self
            .best
            .partition_point(|kept| compare(model, kept, &scored) == Ordering::Less);
        self.best.insert(pos, scored);
        self.best.truncate(keep);
    }

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn merge(mut self, other: Tally, model: &PreferenceModel, keep: usize) -> Self {
        self.considered += other.considered;
        self.valid += other.valid;
        for scored in other.best {
            self.offer(model, scored, keep);
        }
        self
    }
}

fn compare(model: &PreferenceModel, a: &Scored, b: &Scored) -> Ordering {
    let (sa, sb) = (a.assignment().subset(), b.assignment().subset());
    a.sum_of_squares()
        .cmp(&b.sum_of_squares())
        .then_with(|| sa.len().cmp(&sb.len()))
        .then_with(|| name_key(model, sa).cmp(&name_key(model, sb)))
}

/// Name-sorted positions of a subset's members.
fn name_key(model: &PreferenceModel, subset: Subset) -> Vec<u32> {
    let mut key: Vec<u32> = subset.iter().map(|c| model.name_position(c)).collect();
    key.sort_unstable();
    key
}
