//! Group selection over ranked preferences.
//!
//! Picks the set of candidates (e.g. books for a reading club) that best
//! serves a population where every participant strictly ranks every
//! candidate. Each participant joins the group of the chosen candidate they
//! rank highest; a selection is only acceptable if every group reaches a
//! minimum size, and among acceptable selections the one with the lowest
//! root-mean-square rank wins.
//!
//! The pipeline has five stages, each pure:
//!
//! - **Preference model** ([`preference`]): validates raw rankings
//! - **Subset enumeration** ([`subset`]): every non-empty candidate subset
//! - **Assignment** ([`assignment`]): each participant's best member
//! - **Evaluation** ([`evaluate`]): group-size filter and RMS penalty
//! - **Selection** ([`select`]): exhaustive search with deterministic
//!   tie-breaking, optionally parallel (`parallel` feature)
//!
//! # Examples
//!
//! ```
//! let outcome = u_groupselect::select(
//!     ["Dune", "Emma", "Ulysses"],
//!     [
//!         ("ann", ["Dune", "Emma", "Ulysses"]),
//!         ("bob", ["Dune", "Ulysses", "Emma"]),
//!         ("cat", ["Emma", "Dune", "Ulysses"]),
//!         ("dan", ["Emma", "Ulysses", "Dune"]),
//!     ],
//!     2,
//! )
//! .unwrap();
//!
//! assert_eq!(outcome.candidates, vec!["Dune", "Emma"]);
//! assert_eq!(outcome.penalty, 1.0);
//! ```

pub mod assignment;
pub mod error;
pub mod evaluate;
pub mod preference;
pub mod select;
pub mod subset;

pub use error::{PreferenceProblem, Result, SelectError};
pub use select::{Outcome, SelectConfig, SelectionReport, Selector};

use preference::PreferenceModel;

/// Selects the best candidate subset for `preferences` over `candidates`.
///
/// Each preference list must order every candidate exactly once, most
/// preferred first. Every chosen candidate must end up with at least
/// `min_group_size` participants.
///
/// # Errors
///
/// - [`SelectError::MalformedPreference`] if a list is not a permutation of
///   `candidates`
/// - [`SelectError::NoFeasibleSelection`] if no subset satisfies
///   `min_group_size`
/// - [`SelectError::InvalidConfig`] if `min_group_size` is 0
pub fn select<C, P, S, L>(candidates: C, preferences: P, min_group_size: usize) -> Result<Outcome>
where
    C: IntoIterator,
    C::Item: Into<String>,
    P: IntoIterator<Item = (S, L)>,
    S: Into<String>,
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    let model = PreferenceModel::new(candidates, preferences)?;
    let config = SelectConfig::default().with_min_group_size(min_group_size);
    Selector::select(&model, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_rejects_malformed_list() {
        let err = select(["A", "B", "C"], [("p", vec!["A", "B"])], 1).unwrap_err();
        assert_eq!(
            err,
            SelectError::MalformedPreference {
                participant: "p".into(),
                problem: PreferenceProblem::Missing("C".into()),
            }
        );
    }

    #[test]
    fn test_select_rejects_duplicate_in_list() {
        let err = select(["A", "B"], [("p", vec!["A", "A"])], 1).unwrap_err();
        assert!(matches!(
            err,
            SelectError::MalformedPreference {
                problem: PreferenceProblem::Duplicate(_),
                ..
            }
        ));
    }

    #[test]
    fn test_select_rejects_zero_group_size() {
        let err = select(["A"], [("p", ["A"])], 0).unwrap_err();
        assert!(matches!(err, SelectError::InvalidConfig(_)));
    }

    #[test]
    fn test_select_end_to_end() {
        let outcome = select(
            ["A", "B", "C"],
            [
                ("p1", ["A", "B", "C"]),
                ("p2", ["A", "B", "C"]),
                ("p3", ["A", "B", "C"]),
            ],
            1,
        )
        .unwrap();
        assert_eq!(outcome.candidates, vec!["A"]);
        assert_eq!(outcome.assignment.len(), 3);
    }
}
