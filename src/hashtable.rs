//! Hashtable: 26 slots routed by last letter, plus stable entry handles.

use crate::entry::Entry;
use crate::key::{hash, Bucket, InvalidKey, BUCKETS};
use crate::slot::{BucketStats, Slot};
use core::fmt;
use log::trace;
use slotmap::DefaultKey;

/// Stable reference to one entry of a [`Hashtable`].
///
/// Entries are never removed, so a handle resolves for as long as the
/// table that minted it lives.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle {
    bucket: Bucket,
    key: DefaultKey,
}

impl Handle {
    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    pub fn entry<'a>(&self, table: &'a Hashtable) -> Option<&'a Entry> {
        table.slots[self.bucket.index()].get(self.key)
    }
}

#[derive(Clone, Debug)]
pub struct Hashtable {
    pub(crate) slots: [Slot; BUCKETS],
}

impl Hashtable {
    /// 26 slots, each seeded with one never-used entry.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Slot::new()),
        }
    }

    /// Slot that `v` routes to.
    pub fn slot(&self, v: &str) -> Result<&Slot, InvalidKey> {
        let b = hash(v)?;
        Ok(&self.slots[b.index()])
    }

    /// All slots in bucket order.
    pub fn slots(&self) -> impl Iterator<Item = (Bucket, &Slot)> {
        Bucket::all().zip(self.slots.iter())
    }

    // Public operations treat an invalid key like an absent one.
    fn route(op: &str, v: &str) -> Option<Bucket> {
        match hash(v) {
            Ok(b) => Some(b),
            Err(err) => {
                trace!("{op}: {err}");
                None
            }
        }
    }

    /// Entry whose stored value is `v`. Tombstoned entries still match;
    /// check [`Entry::status`] to tell a live key from a deleted one.
    pub fn search(&self, v: &str) -> Option<&Entry> {
        let b = Self::route("search", v)?;
        self.slots[b.index()].find(v)
    }

    /// Like [`search`](Self::search), but returns a handle.
    pub fn find(&self, v: &str) -> Option<Handle> {
        let bucket = Self::route("find", v)?;
        let key = self.slots[bucket.index()].position(v)?;
        Some(Handle { bucket, key })
    }

    /// Insert `v`, reviving its tombstone in place if it has one.
    ///
    /// Returns false for invalid keys and for values already occupied.
    pub fn insert(&mut self, v: &str) -> bool {
        let Some(b) = Self::route("insert", v) else {
            return false;
        };
        let slot = &mut self.slots[b.index()];
        match slot.position(v) {
            Some(k) => slot.get_mut(k).is_some_and(|e| e.set(v)),
            None => slot.append(v),
        }
    }

    /// Tombstone the entry holding `v`.
    ///
    /// True whenever a matching entry exists, including one that is
    /// already a tombstone.
    pub fn delete(&mut self, v: &str) -> bool {
        let Some(b) = Self::route("delete", v) else {
            return false;
        };
        let slot = &mut self.slots[b.index()];
        match slot.position(v).and_then(|k| slot.get_mut(k)) {
            Some(e) => {
                e.delete();
                true
            }
            None => false,
        }
    }

    /// Number of occupied entries.
    pub fn len(&self) -> usize {
        self.slots.iter().map(|s| s.stats().occupied).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> [BucketStats; BUCKETS] {
        core::array::from_fn(|i| self.slots[i].stats())
    }

    /// Per-bucket counts as `<letter><occupied><tombstone><never-used>`,
    /// space separated, skipping buckets with nothing occupied or deleted.
    ///
    /// # Panics
    ///
    /// Panics if a bucket holds more than one never-used entry, which
    /// means its sentinel discipline was broken.
    pub fn dump(&self) -> String {
        let mut parts = Vec::new();
        for (bucket, s) in Bucket::all().zip(self.stats()) {
            if s.never_used > 1 {
                panic!("more than one never-used entry in bucket {bucket}: {s:?}");
            }
            if s.occupied > 0 || s.tombstone > 0 {
                parts.push(format!(
                    "{bucket}{}{}{}",
                    s.occupied, s.tombstone, s.never_used
                ));
            }
        }
        parts.join(" ")
    }
}

impl Default for Hashtable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hashtable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}
