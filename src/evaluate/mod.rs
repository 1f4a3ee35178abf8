//! Validity filtering and penalty scoring.
//!
//! A subset is valid when every member attracts at least the minimum group
//! size. Valid subsets are scored by the root-mean-square of participant
//! scores, which punishes a few bad outcomes harder than many mediocre
//! ones. Invalidity is an ordinary outcome, not an error.

use crate::assignment::Assignment;

/// Summary statistics over one assignment's scores.
///
/// Only [`rms`](Self::rms) drives selection; the means are reported for
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreStats {
    /// Root-mean-square score (the penalty).
    pub rms: f64,
    /// Arithmetic mean score.
    pub mean: f64,
    /// Harmonic mean score.
    pub harmonic_mean: f64,
}

impl ScoreStats {
    /// Computes the statistics for a non-empty slice of scores.
    ///
    /// Returns `None` when `scores` is empty.
    pub fn from_scores(scores: &[u32]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let k = scores.len() as f64;
        let (sum, sum_sq, sum_inv) = scores.iter().fold((0.0, 0.0, 0.0), |(s, q, i), &x| {
            let x = f64::from(x);
            (s + x, q + x * x, i + 1.0 / x)
        });
        Some(Self {
            rms: (sum_sq / k).sqrt(),
            mean: sum / k,
            harmonic_mean: k / sum_inv,
        })
    }
}

/// A valid subset with its assignment and penalty.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    assignment: Assignment,
    sum_of_squares: u64,
    stats: ScoreStats,
}

impl Scored {
    /// The root-mean-square penalty. Lower is better.
    pub fn penalty(&self) -> f64 {
        self.stats.rms
    }

    /// All score statistics.
    pub fn stats(&self) -> ScoreStats {
        self.stats
    }

    /// Exact sum of squared scores. Penalties are ordered exactly as these
    /// sums, since every assignment covers the same participants.
    pub fn sum_of_squares(&self) -> u64 {
        self.sum_of_squares
    }

    /// The assignment that produced this score.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }
}

/// Result of evaluating one subset.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Some member has fewer than the minimum group size assigned.
    Invalid(Assignment),
    /// Every member has enough participants.
    Valid(Scored),
}

impl Evaluation {
    /// Whether every member met the minimum group size.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The penalty, for valid evaluations.
    pub fn penalty(&self) -> Option<f64> {
        match self {
            Self::Valid(scored) => Some(scored.penalty()),
            Self::Invalid(_) => None,
        }
    }

    /// The resolved assignment, valid or not.
    pub fn assignment(&self) -> &Assignment {
        match self {
            Self::Valid(scored) => scored.assignment(),
            Self::Invalid(assignment) => assignment,
        }
    }

    /// The scored subset, or `None` if invalid.
    pub fn into_valid(self) -> Option<Scored> {
        match self {
            Self::Valid(scored) => Some(scored),
            Self::Invalid(_) => None,
        }
    }
}

/// Applies the minimum-group-size rule and scores valid assignments.
///
/// `min_group_size` must be at least 1; callers validate it through
/// [`SelectConfig::validate`](crate::select::SelectConfig::validate).
pub fn evaluate(assignment: Assignment, min_group_size: usize) -> Evaluation {
    debug_assert!(min_group_size >= 1, "min_group_size must be at least 1");

    if assignment.min_count() < min_group_size {
        return Evaluation::Invalid(assignment);
    }
    // A valid subset has at least one member with at least one participant.
    match ScoreStats::from_scores(assignment.scores()) {
        Some(stats) => Evaluation::Valid(Scored {
            sum_of_squares: assignment.sum_of_squares(),
            stats,
            assignment,
        }),
        None => Evaluation::Invalid(assignment),
    }
}
