//! Error types for group selection.

use thiserror::Error;

/// Result type for group selection operations.
pub type Result<T> = std::result::Result<T, SelectError>;

/// What is wrong with a single participant's preference list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreferenceProblem {
    /// A candidate of the universe does not appear in the list.
    Missing(String),
    /// A candidate appears more than once.
    Duplicate(String),
    /// The list names a candidate outside the universe.
    Unknown(String),
}

impl std::fmt::Display for PreferenceProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(c) => write!(f, "candidate '{c}' is missing"),
            Self::Duplicate(c) => write!(f, "candidate '{c}' is listed more than once"),
            Self::Unknown(c) => write!(f, "candidate '{c}' is not in the candidate set"),
        }
    }
}

/// Errors returned by preference modelling and selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// A participant's list is not a permutation of the candidate universe.
    #[error("malformed preferences for '{participant}': {problem}")]
    MalformedPreference {
        participant: String,
        problem: PreferenceProblem,
    },

    /// No subset gives every chosen candidate enough participants.
    #[error(
        "no feasible selection: {participants} participant(s) cannot form groups of at least {min_group_size}"
    )]
    NoFeasibleSelection {
        min_group_size: usize,
        participants: usize,
    },

    /// The candidate universe is empty.
    #[error("candidate set is empty")]
    EmptyUniverse,

    /// The same candidate appears twice in the universe.
    #[error("duplicate candidate '{0}'")]
    DuplicateCandidate(String),

    /// Two participants share an identifier.
    #[error("duplicate participant '{0}'")]
    DuplicateParticipant(String),

    /// The universe is too large to be encoded as a subset mask.
    #[error("{count} candidates exceeds the supported maximum of {max}")]
    TooManyCandidates { count: usize, max: usize },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_participant_and_candidate() {
        let err = SelectError::MalformedPreference {
            participant: "ann".into(),
            problem: PreferenceProblem::Missing("Dune".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("ann"), "{msg}");
        assert!(msg.contains("Dune"), "{msg}");
    }

    #[test]
    fn test_no_feasible_message() {
        let err = SelectError::NoFeasibleSelection {
            min_group_size: 4,
            participants: 3,
        };
        assert_eq!(
            err.to_string(),
            "no feasible selection: 3 participant(s) cannot form groups of at least 4"
        );
    }
}
