//! Preference model.
//!
//! Turns raw most-to-least preferred lists into a per-participant rank
//! lookup over a fixed candidate universe. Every list must be a
//! permutation of the universe; anything else is rejected with
//! [`SelectError::MalformedPreference`](crate::SelectError::MalformedPreference).
//!
//! # Key Types
//!
//! - [`PreferenceModel`]: The candidate universe plus all participants
//! - [`Participant`]: One participant's strict ranking (1 = most preferred)

mod model;

pub use model::{CandidateId, Participant, PreferenceModel, MAX_CANDIDATES};
