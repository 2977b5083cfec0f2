//! Slot: the growable entry sequence behind one bucket.
//!
//! Entries live in a `SlotMap` so that handles to them are stable,
//! generational keys. Entries are never removed, so the map's iteration
//! order is insertion order, which is the scan order `find` relies on.
//! `sentinel` is the key of the single trailing never-used entry.

use crate::entry::{Entry, Status};
use slotmap::{DefaultKey, SlotMap};

/// Entry counts by status for one slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BucketStats {
    pub occupied: usize,
    pub tombstone: usize,
    pub never_used: usize,
}

#[derive(Clone, Debug)]
pub struct Slot {
    entries: SlotMap<DefaultKey, Entry>,
    sentinel: DefaultKey,
}

impl Slot {
    /// A slot holding just its never-used sentinel.
    pub fn new() -> Self {
        let mut entries = SlotMap::with_key();
        let sentinel = entries.insert(Entry::new());
        Self { entries, sentinel }
    }

    /// Number of entries, sentinel included. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in sequence order; the last one is the sentinel.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// First entry whose stored value equals `v`, whatever its status.
    pub fn find(&self, v: &str) -> Option<&Entry> {
        self.position(v).and_then(|k| self.entries.get(k))
    }

    /// Consume the sentinel with `v`, then push a fresh sentinel.
    ///
    /// The fresh sentinel is pushed even if `set` refuses `v`, so callers
    /// must only append valid keys. Returns what `set` returned.
    pub fn append(&mut self, v: &str) -> bool {
        let last = &mut self.entries[self.sentinel];
        debug_assert_eq!(last.status(), Status::NeverUsed);
        let appended = last.set(v);
        self.sentinel = self.entries.insert(Entry::new());
        appended
    }

    pub fn stats(&self) -> BucketStats {
        let mut s = BucketStats::default();
        for e in self.entries.values() {
            match e.status() {
                Status::Occupied => s.occupied += 1,
                Status::Tombstone => s.tombstone += 1,
                Status::NeverUsed => s.never_used += 1,
            }
        }
        s
    }

    pub(crate) fn position(&self, v: &str) -> Option<DefaultKey> {
        self.entries
            .iter()
            .find(|(_, e)| e.value() == v)
            .map(|(k, _)| k)
    }

    pub(crate) fn sentinel_key(&self) -> DefaultKey {
        self.sentinel
    }

    pub(crate) fn get(&self, k: DefaultKey) -> Option<&Entry> {
        self.entries.get(k)
    }

    pub(crate) fn get_mut(&mut self, k: DefaultKey) -> Option<&mut Entry> {
        self.entries.get_mut(k)
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(s: &Slot) -> Vec<Status> {
        s.entries().map(Entry::status).collect()
    }

    #[test]
    fn new_slot_is_one_sentinel() {
        let s = Slot::new();
        assert_eq!(s.len(), 1);
        assert_eq!(statuses(&s), vec![Status::NeverUsed]);
        assert_eq!(
            s.stats(),
            BucketStats {
                occupied: 0,
                tombstone: 0,
                never_used: 1
            }
        );
    }

    #[test]
    fn append_consumes_sentinel_and_grows_by_one() {
        let mut s = Slot::new();
        assert!(s.append("ba"));
        assert!(s.append("ca"));
        assert_eq!(s.len(), 3);
        assert_eq!(
            statuses(&s),
            vec![Status::Occupied, Status::Occupied, Status::NeverUsed]
        );
        let values: Vec<&str> = s.entries().map(Entry::value).collect();
        assert_eq!(values, vec!["ba", "ca", ""]);
    }

    #[test]
    fn find_matches_tombstones_by_value() {
        let mut s = Slot::new();
        s.append("ba");
        let k = s.position("ba").unwrap();
        s.get_mut(k).unwrap().delete();

        let e = s.find("ba").expect("tombstone still matches by value");
        assert_eq!(e.status(), Status::Tombstone);
        assert!(s.find("da").is_none());
    }

    #[test]
    fn find_returns_first_match_in_sequence_order() {
        let mut s = Slot::new();
        s.append("ba");
        s.append("ca");
        let first = s.position("ba").unwrap();
        // Force a duplicate value further down the sequence.
        s.get_mut(first).unwrap().delete();
        s.append("ba");

        assert_eq!(s.position("ba"), Some(first));
        assert_eq!(s.find("ba").unwrap().status(), Status::Tombstone);
    }

    #[test]
    fn sentinel_never_matches_a_valid_key() {
        let s = Slot::new();
        assert!(s.find("a").is_none());
    }

    /// Appending a refused value still pushes a sentinel, leaving two.
    #[test]
    fn refused_append_still_pushes_sentinel() {
        let mut s = Slot::new();
        assert!(!s.append("NOPE"));
        assert_eq!(s.len(), 2);
        assert_eq!(s.stats().never_used, 2);
    }
}
