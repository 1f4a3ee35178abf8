//! Assignment resolution.
//!
//! Given a subset, every participant is assigned the member they rank
//! best. Because rankings are strict, that member is always unique.

use crate::preference::{CandidateId, PreferenceModel};
use crate::subset::Subset;

/// Each participant's assigned candidate within one subset, with the
/// resulting scores and per-candidate head counts.
///
/// Participant-indexed vectors follow [`PreferenceModel::participants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    subset: Subset,
    assigned: Vec<CandidateId>,
    scores: Vec<u32>,
    /// `(candidate, participants assigned)` for every member, ascending id.
    counts: Vec<(CandidateId, usize)>,
}

impl Assignment {
    /// The subset this assignment was resolved for.
    pub fn subset(&self) -> Subset {
        self.subset
    }

    /// Assigned candidate per participant.
    pub fn assigned(&self) -> &[CandidateId] {
        &self.assigned
    }

    /// Score (rank of the assigned candidate) per participant.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Head count per member candidate, ascending candidate id.
    pub fn counts(&self) -> &[(CandidateId, usize)] {
        &self.counts
    }

    /// Participants assigned to `candidate` (0 if it is not a member).
    pub fn count(&self, candidate: CandidateId) -> usize {
        self.counts
            .iter()
            .find(|&&(c, _)| c == candidate)
            .map_or(0, |&(_, n)| n)
    }

    /// Smallest head count over the members.
    pub fn min_count(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).min().unwrap_or(0)
    }

    /// Sum of squared scores.
    pub fn sum_of_squares(&self) -> u64 {
        self.scores.iter().map(|&s| u64::from(s) * u64::from(s)).sum()
    }
}

/// Resolves the assignment of every participant for `subset`.
///
/// # Panics
/// Panics if `subset` is empty or names candidates outside the model's
/// universe. The enumerator never produces such subsets.
pub fn resolve(model: &PreferenceModel, subset: Subset) -> Assignment {
    assert!(!subset.is_empty(), "cannot resolve an empty subset");
    let n = model.candidate_count();
    assert!(
        n >= 64 || subset.mask() >> n == 0,
        "subset {:#b} exceeds a universe of {n} candidates",
        subset.mask()
    );

    let mut per_candidate = vec![0usize; n];
    let mut assigned = Vec::with_capacity(model.participant_count());
    let mut scores = Vec::with_capacity(model.participant_count());

    for participant in model.participants() {
        // The first member in preference order is the best-ranked one.
        let choice = participant
            .order()
            .iter()
            .copied()
            .find(|&c| subset.contains(c))
            .expect("a complete ranking always reaches a member of a non-empty subset");
        per_candidate[choice] += 1;
        assigned.push(choice);
        scores.push(participant.rank(choice));
    }

    let counts = subset.iter().map(|c| (c, per_candidate[c])).collect();

    Assignment {
        subset,
        assigned,
        scores,
        counts,
    }
}
