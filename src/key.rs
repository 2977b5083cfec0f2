//! Key validation and last-letter bucket selection.

use core::fmt;

/// Number of buckets, one per lowercase ASCII letter.
pub const BUCKETS: usize = 26;
/// Shortest accepted key, in bytes.
pub const MIN_KEY_LEN: usize = 1;
/// Longest accepted key, in bytes.
pub const MAX_KEY_LEN: usize = 10;

/// Returned by [`hash`] when a key fails [`is_valid_key`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid key {value:?} (len: {})", .value.len())]
pub struct InvalidKey {
    pub value: String,
}

/// Index of one of the 26 buckets; bucket `i` holds keys ending in `'a' + i`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bucket(u8);

impl Bucket {
    /// Bucket for a lowercase ASCII letter, `None` for anything else.
    pub fn from_letter(c: char) -> Option<Self> {
        if c.is_ascii_lowercase() {
            Some(Bucket(c as u8 - b'a'))
        } else {
            None
        }
    }

    /// Bucket by position, `None` when `i >= BUCKETS`.
    pub fn from_index(i: usize) -> Option<Self> {
        if i < BUCKETS {
            Some(Bucket(i as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn letter(self) -> char {
        (b'a' + self.0) as char
    }

    /// All buckets in index order, `a` through `z`.
    pub fn all() -> impl Iterator<Item = Bucket> {
        (0..BUCKETS as u8).map(Bucket)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// True iff `v` is 1..=10 bytes of `a`-`z`.
pub fn is_valid_key(v: &str) -> bool {
    (MIN_KEY_LEN..=MAX_KEY_LEN).contains(&v.len()) && v.bytes().all(|b| b.is_ascii_lowercase())
}

/// Bucket for `v`, chosen by its last letter.
pub fn hash(v: &str) -> Result<Bucket, InvalidKey> {
    if !is_valid_key(v) {
        return Err(InvalidKey {
            value: v.to_owned(),
        });
    }
    // Validated above: non-empty and ASCII only.
    let last = v.as_bytes()[v.len() - 1];
    Ok(Bucket(last - b'a'))
}
