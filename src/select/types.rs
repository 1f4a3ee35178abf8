//! Selection results.

use crate::evaluate::{ScoreStats, Scored};
use crate::preference::PreferenceModel;

/// One participant's assigned candidate and the rank they gave it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub participant: String,
    pub candidate: String,
    pub rank: u32,
}

/// Participants gathered around one chosen candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub candidate: String,
    /// `(participant, rank)` in participant input order.
    pub members: Vec<(String, u32)>,
}

/// The chosen subset and its assignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Chosen candidates in universe order.
    pub candidates: Vec<String>,
    /// Assignment of every participant, in participant input order.
    pub assignment: Vec<Placement>,
    /// Root-mean-square score achieved.
    pub penalty: f64,
    /// Penalty plus secondary statistics.
    pub stats: ScoreStats,
}

impl Outcome {
    pub(crate) fn from_scored(model: &PreferenceModel, scored: &Scored) -> Self {
        let assignment = scored.assignment();
        let candidates = assignment
            .subset()
            .iter()
            .map(|c| model.candidate_name(c).to_string())
            .collect();
        let placements = model
            .participants()
            .iter()
            .zip(assignment.assigned().iter().zip(assignment.scores()))
            .map(|(p, (&c, &rank))| Placement {
                participant: p.name().to_string(),
                candidate: model.candidate_name(c).to_string(),
                rank,
            })
            .collect();
        Self {
            candidates,
            assignment: placements,
            penalty: scored.penalty(),
            stats: scored.stats(),
        }
    }

    /// The candidate assigned to `participant`, if they took part.
    pub fn candidate_for(&self, participant: &str) -> Option<&str> {
        self.assignment
            .iter()
            .find(|p| p.participant == participant)
            .map(|p| p.candidate.as_str())
    }

    /// Participants grouped by chosen candidate, in candidate order.
    pub fn groups(&self) -> Vec<Group> {
        self.candidates
            .iter()
            .map(|candidate| Group {
                candidate: candidate.clone(),
                members: self
                    .assignment
                    .iter()
                    .filter(|p| &p.candidate == candidate)
                    .map(|p| (p.participant.clone(), p.rank))
                    .collect(),
            })
            .collect()
    }
}

/// Full result of a ranking run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionReport {
    /// Up to `top_k` valid selections, best first. Never empty.
    pub ranked: Vec<Outcome>,
    /// Subsets evaluated (`2^n - 1`).
    pub considered: u64,
    /// Subsets that met the minimum group size.
    pub valid: u64,
}

impl SelectionReport {
    /// The winning selection.
    pub fn best(&self) -> &Outcome {
        &self.ranked[0]
    }

    /// Subsets discarded for having an undersized group.
    pub fn filtered(&self) -> u64 {
        self.considered - self.valid
    }
}
