//! Preference model construction and rank lookup.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::{PreferenceProblem, Result, SelectError};

/// Index of a candidate within the universe.
pub type CandidateId = usize;

/// Largest supported universe. Subsets are stored as 64-bit masks and the
/// enumerator needs one spare bit for its upper bound.
pub const MAX_CANDIDATES: usize = 63;

/// A participant with a strict total order over the candidate universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    /// Candidates from most to least preferred.
    order: Vec<CandidateId>,
    /// `ranks[c]` is the 1-based rank of candidate `c`.
    ranks: Vec<u32>,
}

impl Participant {
    /// The participant's identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rank of `candidate` for this participant (1 = most preferred).
    ///
    /// # Panics
    /// Panics if `candidate` is outside the universe.
    pub fn rank(&self, candidate: CandidateId) -> u32 {
        self.ranks[candidate]
    }

    /// Candidates ordered from most to least preferred.
    pub fn order(&self) -> &[CandidateId] {
        &self.order
    }
}

/// The candidate universe together with every participant's ranking.
///
/// Immutable once built; all later stages only borrow it.
///
/// # Examples
///
/// ```
/// use u_groupselect::preference::PreferenceModel;
///
/// let model = PreferenceModel::new(
///     ["Dune", "Emma"],
///     [("ann", ["Emma", "Dune"]), ("bob", ["Dune", "Emma"])],
/// )
/// .unwrap();
///
/// assert_eq!(model.candidate_count(), 2);
/// assert_eq!(model.participants()[0].rank(0), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceModel {
    candidates: Vec<String>,
    participants: Vec<Participant>,
    /// Position of each candidate when the universe is sorted by name.
    name_order: Vec<u32>,
}

impl PreferenceModel {
    /// Builds a model over an explicit candidate universe.
    ///
    /// Candidate order is preserved and defines [`CandidateId`]s.
    /// Participant order is preserved as given.
    pub fn new<C, P, S, L>(candidates: C, preferences: P) -> Result<Self>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
        if candidates.is_empty() {
            return Err(SelectError::EmptyUniverse);
        }
        if candidates.len() > MAX_CANDIDATES {
            return Err(SelectError::TooManyCandidates {
                count: candidates.len(),
                max: MAX_CANDIDATES,
            });
        }

        let mut index: HashMap<&str, CandidateId> = HashMap::with_capacity(candidates.len());
        for (id, name) in candidates.iter().enumerate() {
            if index.insert(name.as_str(), id).is_some() {
                return Err(SelectError::DuplicateCandidate(name.clone()));
            }
        }

        let mut seen_names = HashSet::new();
        let mut participants = Vec::new();
        for (name, list) in preferences {
            let name: String = name.into();
            if !seen_names.insert(name.clone()) {
                return Err(SelectError::DuplicateParticipant(name));
            }
            let order = resolve_order(&name, list, &index, &candidates)?;
            let mut ranks = vec![0u32; candidates.len()];
            for (pos, &c) in order.iter().enumerate() {
                ranks[c] = pos as u32 + 1;
            }
            participants.push(Participant { name, order, ranks });
        }

        let mut by_name: Vec<CandidateId> = (0..candidates.len()).collect();
        by_name.sort_by(|&a, &b| candidates[a].cmp(&candidates[b]));
        let mut name_order = vec![0u32; candidates.len()];
        for (pos, c) in by_name.into_iter().enumerate() {
            name_order[c] = pos as u32;
        }

        Ok(Self {
            candidates,
            participants,
            name_order,
        })
    }

    /// Builds a model whose universe is every candidate named in any list,
    /// sorted by name.
    ///
    /// Each list is then checked against that universe, so a participant
    /// who omits a candidate someone else listed is still rejected.
    pub fn infer<P, S, L, T>(preferences: P) -> Result<Self>
    where
        P: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let lists: Vec<(String, Vec<String>)> = preferences
            .into_iter()
            .map(|(name, list)| {
                (
                    name.into(),
                    list.into_iter().map(|c| c.as_ref().to_string()).collect(),
                )
            })
            .collect();
        let universe: BTreeSet<&str> = lists
            .iter()
            .flat_map(|(_, list)| list.iter().map(String::as_str))
            .collect();
        let universe: Vec<String> = universe.into_iter().map(str::to_string).collect();
        Self::new(universe, lists)
    }

    /// Number of candidates in the universe.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Candidate names in universe order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Name of a candidate.
    pub fn candidate_name(&self, candidate: CandidateId) -> &str {
        &self.candidates[candidate]
    }

    /// All participants in input order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Number of participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Position of `candidate` in the name-sorted universe.
    pub(crate) fn name_position(&self, candidate: CandidateId) -> u32 {
        self.name_order[candidate]
    }
}

fn resolve_order<L>(
    participant: &str,
    list: L,
    index: &HashMap<&str, CandidateId>,
    candidates: &[String],
) -> Result<Vec<CandidateId>>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    let malformed = |problem: PreferenceProblem| SelectError::MalformedPreference {
        participant: participant.to_string(),
        problem,
    };

    let mut seen = vec![false; candidates.len()];
    let mut order = Vec::with_capacity(candidates.len());
    for item in list {
        let item = item.as_ref();
        let &id = index
            .get(item)
            .ok_or_else(|| malformed(PreferenceProblem::Unknown(item.to_string())))?;
        if seen[id] {
            return Err(malformed(PreferenceProblem::Duplicate(item.to_string())));
        }
        seen[id] = true;
        order.push(id);
    }

    if let Some(missing) = seen.iter().position(|&s| !s) {
        return Err(malformed(PreferenceProblem::Missing(
            candidates[missing].clone(),
        )));
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed_problem(result: Result<PreferenceModel>) -> PreferenceProblem {
        match result {
            Err(SelectError::MalformedPreference { problem, .. }) => problem,
            other => panic!("expected MalformedPreference, got {other:?}"),
        }
    }

    #[test]
    fn test_ranks_follow_list_order() {
        let model =
            PreferenceModel::new(["A", "B", "C"], [("p", ["C", "A", "B"])]).unwrap();
        let p = &model.participants()[0];
        assert_eq!(p.name(), "p");
        assert_eq!(p.rank(2), 1);
        assert_eq!(p.rank(0), 2);
        assert_eq!(p.rank(1), 3);
        assert_eq!(p.order(), &[2, 0, 1]);
    }

    #[test]
    fn test_ranks_form_bijection() {
        let model = PreferenceModel::new(
            ["A", "B", "C", "D"],
            [("p", ["D", "B", "A", "C"]), ("q", ["A", "B", "C", "D"])],
        )
        .unwrap();
        for p in model.participants() {
            let mut ranks: Vec<u32> = (0..4).map(|c| p.rank(c)).collect();
            ranks.sort_unstable();
            assert_eq!(ranks, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_missing_candidate_rejected() {
        let problem =
            malformed_problem(PreferenceModel::new(["A", "B", "C"], [("p", ["A", "C"])]));
        assert_eq!(problem, PreferenceProblem::Missing("B".into()));
    }

    #[test]
    fn test_duplicate_candidate_in_list_rejected() {
        let problem = malformed_problem(PreferenceModel::new(
            ["A", "B", "C"],
            [("p", ["A", "B", "A"])],
        ));
        assert_eq!(problem, PreferenceProblem::Duplicate("A".into()));
    }

    #[test]
    fn test_unknown_candidate_rejected() {
        let problem = malformed_problem(PreferenceModel::new(
            ["A", "B"],
            [("p", ["A", "B", "Z"])],
        ));
        assert_eq!(problem, PreferenceProblem::Unknown("Z".into()));
    }

    #[test]
    fn test_error_names_offending_participant() {
        let err = PreferenceModel::new(
            ["A", "B"],
            [("ok", vec!["A", "B"]), ("bad", vec!["B"])],
        )
        .unwrap_err();
        match err {
            SelectError::MalformedPreference { participant, .. } => assert_eq!(participant, "bad"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_empty_universe_rejected() {
        let empty: [&str; 0] = [];
        let prefs: [(&str, [&str; 0]); 0] = [];
        assert_eq!(
            PreferenceModel::new(empty, prefs).unwrap_err(),
            SelectError::EmptyUniverse
        );
    }

    #[test]
    fn test_duplicate_universe_candidate_rejected() {
        let prefs: [(&str, [&str; 0]); 0] = [];
        assert_eq!(
            PreferenceModel::new(["A", "A"], prefs).unwrap_err(),
            SelectError::DuplicateCandidate("A".into())
        );
    }

    #[test]
    fn test_duplicate_participant_rejected() {
        let err = PreferenceModel::new(["A"], [("p", ["A"]), ("p", ["A"])]).unwrap_err();
        assert_eq!(err, SelectError::DuplicateParticipant("p".into()));
    }

    #[test]
    fn test_too_many_candidates_rejected() {
        let names: Vec<String> = (0..=MAX_CANDIDATES).map(|i| format!("c{i}")).collect();
        let prefs: [(&str, [&str; 0]); 0] = [];
        assert_eq!(
            PreferenceModel::new(names, prefs).unwrap_err(),
            SelectError::TooManyCandidates {
                count: MAX_CANDIDATES + 1,
                max: MAX_CANDIDATES,
            }
        );
    }

    #[test]
    fn test_infer_builds_sorted_universe() {
        let model = PreferenceModel::infer([
            ("ann", vec!["Emma", "Dune", "Beloved"]),
            ("bob", vec!["Beloved", "Emma", "Dune"]),
        ])
        .unwrap();
        assert_eq!(model.candidates(), &["Beloved", "Dune", "Emma"]);
        assert_eq!(model.participants()[0].rank(2), 1);
        assert_eq!(model.participants()[1].rank(0), 1);
    }

    #[test]
    fn test_infer_rejects_partial_list() {
        let err = PreferenceModel::infer([
            ("ann", vec!["Emma", "Dune"]),
            ("bob", vec!["Emma"]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SelectError::MalformedPreference {
                participant: "bob".into(),
                problem: PreferenceProblem::Missing("Dune".into()),
            }
        );
    }

    #[test]
    fn test_name_position_sorts_by_name() {
        let prefs: [(&str, [&str; 0]); 0] = [];
        let model = PreferenceModel::new(["c", "a", "b"], prefs).unwrap();
        assert_eq!(model.name_position(0), 2);
        assert_eq!(model.name_position(1), 0);
        assert_eq!(model.name_position(2), 1);
    }
}
