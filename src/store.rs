// Generic Entity Store + ordering helpers
//
// One store per entity kind, keyed by unique identifier. Both registries
// are built from the same container: the record kinds differ, the
// uniqueness / lookup / ordering rules do not.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{RegistryError, Result};

/// Capability every stored record exposes: a unique numeric identifier,
/// externally assigned and never reused while the record lives.
pub trait Identified {
    fn id(&self) -> u64;
}

// ============================================================================
// STORE
// ============================================================================

/// In-memory collection of one entity kind.
///
/// Backed by a Vec in insertion order. Lookups are linear scans; insertion
/// order is never relied on for query results — every ordering guarantee is
/// applied explicitly on top (see `sorted_ids` / `max_id_by` / `top_ids`).
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Store<T: Identified> {
    entries: Vec<T>,
}

impl<T: Identified> Store<T> {
    /// Create new empty store
    pub fn new() -> Self {
        Store {
            entries: Vec::new(),
        }
    }

    /// Append an entity, rejecting a duplicate identifier before any change.
    pub fn insert(&mut self, entity: T) -> Result<()> {
        if self.contains(entity.id()) {
            return Err(RegistryError::IdentifierInUse(entity.id()));
        }
        self.entries.push(entity);
        Ok(())
    }

    /// Exact-match retrieval; absence is `None`, converted into the
    /// domain-specific not-found error at the call site.
    pub fn find(&self, id: u64) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn find_mut(&mut self, id: u64) -> Option<&mut T> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    /// Remove an entity by identifier, returning it if it was present.
    /// The identifier simply becomes absent from subsequent lookups.
    pub fn remove(&mut self, id: u64) -> Option<T> {
        let pos = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Identified> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ORDERING CONTRACT
// ============================================================================

/// Ascending identifiers of every entity the iterator yields.
/// Every id-listing query goes through here.
pub fn sorted_ids<'a, T, I>(iter: I) -> Vec<u64>
where
    T: Identified + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut ids: Vec<u64> = iter.map(|e| e.id()).collect();
    ids.sort_unstable();
    ids
}

/// Identifier of the metric maximum over the eligible subset,
/// equal-metric ties resolved to the lowest identifier.
pub fn max_id_by<'a, T, I, F>(iter: I, cmp: F) -> Option<u64>
where
    T: Identified + 'a,
    I: Iterator<Item = &'a T>,
    F: Fn(&T, &T) -> Ordering,
{
    extremum_id(iter, cmp, Ordering::Greater)
}

/// Identifier of the metric minimum over the eligible subset,
/// equal-metric ties resolved to the lowest identifier.
pub fn min_id_by<'a, T, I, F>(iter: I, cmp: F) -> Option<u64>
where
    T: Identified + 'a,
    I: Iterator<Item = &'a T>,
    F: Fn(&T, &T) -> Ordering,
{
    extremum_id(iter, cmp, Ordering::Less)
}

/// The subset is ordered by id ascending first, and the fold replaces the
/// champion only on a strictly better metric, so the lowest identifier wins
/// every tie in both directions. Deliberately not `Iterator::max_by` /
/// `min_by`: their tie behavior differs between the two directions (max
/// keeps the last equal element, min the first).
fn extremum_id<'a, T, I, F>(iter: I, cmp: F, winning: Ordering) -> Option<u64>
where
    T: Identified + 'a,
    I: Iterator<Item = &'a T>,
    F: Fn(&T, &T) -> Ordering,
{
    let mut subset: Vec<&T> = iter.collect();
    subset.sort_by_key(|e| e.id());
    subset
        .into_iter()
        .reduce(|best, candidate| {
            if cmp(candidate, best) == winning {
                candidate
            } else {
                best
            }
        })
        .map(|e| e.id())
}

/// Top-N identifiers: metric descending, id ascending on ties, truncated to
/// `count`. A count larger than the population returns everything.
pub fn top_ids<'a, T, I, F>(iter: I, cmp: F, count: usize) -> Vec<u64>
where
    T: Identified + 'a,
    I: Iterator<Item = &'a T>,
    F: Fn(&T, &T) -> Ordering,
{
    let mut subset: Vec<&T> = iter.collect();
    subset.sort_by(|a, b| cmp(b, a).then_with(|| a.id().cmp(&b.id())));
    subset.into_iter().take(count).map(|e| e.id()).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Rec {
        id: u64,
        score: u32,
    }

    impl Identified for Rec {
        fn id(&self) -> u64 {
            self.id
        }
    }

    fn rec(id: u64, score: u32) -> Rec {
        Rec { id, score }
    }

    #[test]
    fn test_insert_and_find() {
        let mut store = Store::new();
        store.insert(rec(7, 1)).unwrap();
        store.insert(rec(3, 2)).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.find(7).unwrap().score, 1);
        assert!(store.find(99).is_none());
        assert!(store.contains(3));
    }

    #[test]
    fn test_duplicate_identifier_rejected_store_unchanged() {
        let mut store = Store::new();
        store.insert(rec(7, 1)).unwrap();

        let err = store.insert(rec(7, 99)).unwrap_err();
        assert_eq!(err, RegistryError::IdentifierInUse(7));

        // First record untouched, nothing appended
        assert_eq!(store.len(), 1);
        assert_eq!(store.find(7).unwrap().score, 1);
    }

    #[test]
    fn test_remove() {
        let mut store = Store::new();
        store.insert(rec(1, 10)).unwrap();
        store.insert(rec(2, 20)).unwrap();

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.id, 1);
        assert!(store.find(1).is_none());
        assert!(store.remove(1).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sorted_ids_ascending_regardless_of_insertion_order() {
        let mut store = Store::new();
        store.insert(rec(5, 0)).unwrap();
        store.insert(rec(1, 0)).unwrap();
        store.insert(rec(3, 0)).unwrap();

        assert_eq!(sorted_ids(store.iter()), vec![1, 3, 5]);
    }

    #[test]
    fn test_max_tie_resolves_to_lowest_id() {
        let mut store = Store::new();
        store.insert(rec(5, 9)).unwrap();
        store.insert(rec(2, 9)).unwrap();
        store.insert(rec(8, 4)).unwrap();

        let winner = max_id_by(store.iter(), |a, b| a.score.cmp(&b.score));
        assert_eq!(winner, Some(2));
    }

    #[test]
    fn test_min_tie_resolves_to_lowest_id() {
        let mut store = Store::new();
        store.insert(rec(9, 3)).unwrap();
        store.insert(rec(4, 3)).unwrap();
        store.insert(rec(1, 7)).unwrap();

        let winner = min_id_by(store.iter(), |a, b| a.score.cmp(&b.score));
        assert_eq!(winner, Some(4));
    }

    #[test]
    fn test_extremum_of_empty_subset_is_none() {
        let store: Store<Rec> = Store::new();
        assert_eq!(max_id_by(store.iter(), |a, b| a.score.cmp(&b.score)), None);
    }

    #[test]
    fn test_top_ids_desc_with_id_tiebreak_and_truncation() {
        let mut store = Store::new();
        store.insert(rec(1, 10)).unwrap();
        store.insert(rec(2, 20)).unwrap();
        store.insert(rec(3, 20)).unwrap();

        let cmp = |a: &Rec, b: &Rec| a.score.cmp(&b.score);
        assert_eq!(top_ids(store.iter(), cmp, 2), vec![2, 3]);
        assert_eq!(top_ids(store.iter(), cmp, 10), vec![2, 3, 1]);
        assert_eq!(top_ids(store.iter(), cmp, 0), Vec::<u64>::new());
    }
}
