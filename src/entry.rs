//! Entry: one record in a bucket, with its lifecycle status.

use crate::key::is_valid_key;

/// Lifecycle of an [`Entry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Never held a value; the trailing sentinel of every slot.
    NeverUsed,
    /// Held a value that was deleted. The value is kept for reuse.
    Tombstone,
    Occupied,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    status: Status,
    value: String,
}

impl Entry {
    pub fn new() -> Self {
        Self {
            status: Status::NeverUsed,
            value: String::new(),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Stored value. Empty for a never-used entry; still set on a tombstone.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_occupied(&self) -> bool {
        self.status == Status::Occupied
    }

    /// Occupy this entry with `v`.
    ///
    /// Refuses (returns false, no change) when already occupied or when `v`
    /// is not a valid key.
    pub fn set(&mut self, v: &str) -> bool {
        if self.status == Status::Occupied || !is_valid_key(v) {
            return false;
        }
        self.status = Status::Occupied;
        self.value.clear();
        self.value.push_str(v);
        true
    }

    /// Tombstone this entry, whatever its current status.
    pub fn delete(&mut self) {
        self.status = Status::Tombstone;
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_never_used_and_empty() {
        let e = Entry::new();
        assert_eq!(e.status(), Status::NeverUsed);
        assert_eq!(e.value(), "");
        assert!(!e.is_occupied());
    }

    #[test]
    fn set_occupies_once() {
        let mut e = Entry::new();
        assert!(e.set("abc"));
        assert_eq!(e.status(), Status::Occupied);
        assert_eq!(e.value(), "abc");

        // Occupied entries cannot be overwritten.
        assert!(!e.set("xyz"));
        assert_eq!(e.value(), "abc");
    }

    #[test]
    fn set_rejects_invalid_value() {
        let mut e = Entry::new();
        assert!(!e.set("ABC"));
        assert!(!e.set(""));
        assert_eq!(e.status(), Status::NeverUsed);
        assert_eq!(e.value(), "");
    }

    #[test]
    fn delete_keeps_value_and_allows_revival() {
        let mut e = Entry::new();
        e.set("abc");
        e.delete();
        assert_eq!(e.status(), Status::Tombstone);
        assert_eq!(e.value(), "abc");

        assert!(e.set("xbc"));
        assert_eq!(e.status(), Status::Occupied);
        assert_eq!(e.value(), "xbc");
    }

    #[test]
    fn delete_has_no_precondition() {
        let mut e = Entry::new();
        e.delete();
        assert_eq!(e.status(), Status::Tombstone);
        e.delete();
        assert_eq!(e.status(), Status::Tombstone);
    }
}
