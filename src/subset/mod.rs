//! Subset enumeration.
//!
//! A [`Subset`] is a bit mask over the candidate universe. The
//! [`SubsetEnumerator`] yields every non-empty mask exactly once, in
//! ascending mask order, and can be iterated any number of times.
//!
//! The search is exhaustive: a universe of `n` candidates has `2^n - 1`
//! subsets. Universes beyond a couple of dozen candidates are outside the
//! intended workload.

use crate::preference::CandidateId;

/// A set of candidates, stored as a bit mask (bit `i` = candidate `i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subset(u64);

impl Subset {
    /// Creates a subset from a raw mask.
    pub fn from_mask(mask: u64) -> Self {
        Self(mask)
    }

    /// Creates a subset from candidate indices.
    ///
    /// # Panics
    /// Panics if an index is 64 or greater.
    pub fn from_candidates<I: IntoIterator<Item = CandidateId>>(candidates: I) -> Self {
        let mask = candidates.into_iter().fold(0u64, |acc, c| {
            assert!(c < 64, "candidate index {c} does not fit a subset mask");
            acc | (1u64 << c)
        });
        Self(mask)
    }

    /// The raw mask.
    pub fn mask(self) -> u64 {
        self.0
    }

    /// Number of candidates in the subset.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the subset has no candidates.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `candidate` belongs to the subset.
    pub fn contains(self, candidate: CandidateId) -> bool {
        candidate < 64 && self.0 & (1u64 << candidate) != 0
    }

    /// Whether every member of `self` is also in `other`.
    pub fn is_subset_of(self, other: Subset) -> bool {
        self.0 & !other.0 == 0
    }

    /// Member candidates in ascending index order.
    pub fn iter(self) -> Members {
        Members(self.0)
    }
}

/// Iterator over the candidates of a [`Subset`].
#[derive(Debug, Clone)]
pub struct Members(u64);

impl Iterator for Members {
    type Item = CandidateId;

    fn next(&mut self) -> Option<CandidateId> {
        if self.0 == 0 {
            return None;
        }
        let c = self.0.trailing_zeros() as CandidateId;
        self.0 &= self.0 - 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Members {}

/// Enumerates all non-empty subsets of a universe of `n` candidates.
///
/// # Examples
///
/// ```
/// use u_groupselect::subset::SubsetEnumerator;
///
/// let subsets = SubsetEnumerator::new(3);
/// assert_eq!(subsets.len(), 7);
/// assert_eq!(subsets.iter().count(), 7);
/// // Restartable: a second pass yields the same sequence.
/// assert!(subsets.iter().eq(subsets.iter()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetEnumerator {
    universe: usize,
}

impl SubsetEnumerator {
    /// Creates an enumerator over a universe of `universe` candidates.
    ///
    /// # Panics
    /// Panics if `universe` exceeds 63.
    pub fn new(universe: usize) -> Self {
        assert!(universe < 64, "universe of {universe} candidates is too large");
        Self { universe }
    }

    /// Number of candidates in the universe.
    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Number of non-empty subsets, `2^n - 1`.
    pub fn len(&self) -> u64 {
        (1u64 << self.universe) - 1
    }

    /// Whether there is no subset to enumerate (empty universe).
    pub fn is_empty(&self) -> bool {
        self.universe == 0
    }

    /// The subset containing every candidate.
    pub fn full(&self) -> Subset {
        Subset(self.len())
    }

    /// Iterates every non-empty subset once, in ascending mask order.
    pub fn iter(&self) -> Subsets {
        Subsets {
            next: 1,
            end: 1u64 << self.universe,
        }
    }

    /// Iterates the subsets whose masks fall in `[start, end)`, clamped to
    /// the non-empty range. Used to split the search across workers.
    pub fn range(&self, start: u64, end: u64) -> Subsets {
        let limit = 1u64 << self.universe;
        Subsets {
            next: start.max(1),
            end: end.min(limit),
        }
    }
}

impl IntoIterator for &SubsetEnumerator {
    type Item = Subset;
    type IntoIter = Subsets;

    fn into_iter(self) -> Subsets {
        self.iter()
    }
}

/// Lazy iterator produced by [`SubsetEnumerator`].
#[derive(Debug, Clone)]
pub struct Subsets {
    next: u64,
    end: u64,
}

impl Iterator for Subsets {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        if self.next >= self.end {
            return None;
        }
        let subset = Subset(self.next);
        self.next += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.next) as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_enumerates_all_nonempty_subsets() {
        for n in 1..=10 {
            let e = SubsetEnumerator::new(n);
            let all: Vec<Subset> = e.iter().collect();
            assert_eq!(all.len() as u64, (1u64 << n) - 1, "n={n}");
            let distinct: HashSet<Subset> = all.iter().copied().collect();
            assert_eq!(distinct.len(), all.len());
            assert!(all.iter().all(|s| !s.is_empty()));
            assert!(all.iter().all(|s| s.is_subset_of(e.full())));
        }
    }

    #[test]
    fn test_empty_universe_yields_nothing() {
        let e = SubsetEnumerator::new(0);
        assert!(e.is_empty());
        assert_eq!(e.len(), 0);
        assert_eq!(e.iter().count(), 0);
    }

    #[test]
    fn test_restartable() {
        let e = SubsetEnumerator::new(4);
        let first: Vec<Subset> = e.iter().collect();
        let second: Vec<Subset> = (&e).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ranges_partition_the_space() {
        let e = SubsetEnumerator::new(6);
        let chunks = [(0, 10), (10, 33), (33, 64), (64, 1000)];
        let joined: Vec<Subset> = chunks
            .iter()
            .flat_map(|&(s, t)| e.range(s, t))
            .collect();
        let all: Vec<Subset> = e.iter().collect();
        assert_eq!(joined, all);
    }

    #[test]
    fn test_subset_members() {
        let s = Subset::from_candidates([0, 3, 5]);
        assert_eq!(s.mask(), 0b101001);
        assert_eq!(s.len(), 3);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 3, 5]);
        assert!(s.contains(3));
        assert!(!s.contains(1));
        assert!(!s.contains(70));
    }

    #[test]
    fn test_size_hint_exact() {
        let e = SubsetEnumerator::new(5);
        let mut it = e.iter();
        assert_eq!(it.size_hint(), (31, Some(31)));
        it.next();
        assert_eq!(it.size_hint(), (30, Some(30)));
        assert_eq!(Subset::from_mask(0b1011).iter().len(), 3);
    }
}
