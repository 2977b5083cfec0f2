//! spehash: a fixed 26-bucket string set over short lowercase keys,
//! routed by each key's last letter, with tombstone deletes.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, fully predictable table where the bucket content for
//!   any sequence of operations can be worked out by hand.
//! - Layers (leaves first):
//!   - `key`: `is_valid_key` (1 to 10 bytes of `a`-`z`) and `hash`, which
//!     maps a valid key to the bucket of its last letter or fails with
//!     `InvalidKey`.
//!   - `Entry`: a stored value plus a status, one of never-used,
//!     tombstone or occupied. `set` refuses occupied entries and invalid
//!     values; `delete` always tombstones.
//!   - `Slot`: one bucket's ordered entry sequence. Entries are never
//!     removed; the sequence only grows.
//!   - `Hashtable`: 26 slots; routes `search`, `insert` and `delete`, and
//!     renders the `dump` diagnostic.
//!
//! Sentinel discipline
//! - Every slot ends with exactly one never-used entry. `Slot::append`
//!   sets that sentinel and then pushes a fresh one, so each bucket has a
//!   single growth point and no capacity counter.
//! - `dump` panics if a bucket ever holds two never-used entries; that
//!   can only come from corrupted state, never from caller input.
//!
//! Reuse on insert
//! - `insert` first looks for an entry already holding the value. If it
//!   finds a tombstone, the tombstone is revived in place and the slot
//!   does not grow. Only values with no matching entry are appended.
//!
//! Lookup semantics
//! - `search`, `find` and `delete` match entries by stored value, whatever
//!   their status: a tombstone is still "found", and deleting it again
//!   reports success. Callers that care about liveness check
//!   `Entry::status`.
//!
//! Errors
//! - `hash` is the only fallible step. The public table operations catch
//!   `InvalidKey`, log it at trace level, and answer as if the key were
//!   absent.
//!
//! Notes and non-goals
//! - Single-threaded and synchronous. The table is plain owned data;
//!   share it behind one external lock if needed.
//! - No rehashing, resizing, or keys beyond ASCII lowercase.

pub mod entry;
pub mod hashtable;
mod hashtable_proptest;
pub mod key;
pub mod slot;

// Public surface
pub use entry::{Entry, Status};
pub use hashtable::{Handle, Hashtable};
pub use key::{hash, is_valid_key, Bucket, InvalidKey, BUCKETS, MAX_KEY_LEN, MIN_KEY_LEN};
pub use slot::{BucketStats, Slot};
