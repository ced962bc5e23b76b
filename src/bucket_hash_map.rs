//! BucketHashMap: fixed slot array with lazily-created dense buckets.

use crate::bucket::Bucket;
use crate::hash::Djb2Hasher;
use core::hash::Hasher;
use std::fmt::Write;

/// A map from string keys to string values with a fixed number of top-level
/// slots.
///
/// Keys route to slots by djb2 modulo the slot count; all keys sharing a
/// slot live in one dense bucket, scanned linearly by exact string
/// equality. The slot count never changes after construction, so growing
/// load lengthens bucket scans instead of triggering a rehash. Buckets are
/// created on first insert into their slot and dropped as soon as they
/// empty, keeping memory proportional to occupancy.
///
/// The table owns copies of everything it stores; callers keep ownership
/// of the strings they pass in.
#[derive(Debug)]
pub struct BucketHashMap {
    slots: Box<[Option<Bucket>]>,
    len: usize,
}

impl BucketHashMap {
    /// Slot count used by `new` and by `with_slots(0)`.
    pub const DEFAULT_SLOTS: usize = 16;

    pub fn new() -> Self {
        Self::with_slots(Self::DEFAULT_SLOTS)
    }

    /// Create a table with a fixed number of slots; `0` selects
    /// [`DEFAULT_SLOTS`](Self::DEFAULT_SLOTS).
    pub fn with_slots(slot_count: usize) -> Self {
        let slot_count = if slot_count == 0 {
            Self::DEFAULT_SLOTS
        } else {
            slot_count
        };
        Self {
            slots: std::iter::repeat_with(|| None).take(slot_count).collect(),
            len: 0,
        }
    }

    /// Slot index for `key`: djb2 over the raw key bytes, modulo the slot
    /// count. Equal keys always land in the same slot.
    fn slot_index(&self, key: &str) -> usize {
        let mut hasher = Djb2Hasher::new();
        hasher.write(key.as_bytes());
        (hasher.finish() % self.slots.len() as u64) as usize
    }

    /// Insert `key → value`, overwriting any previous value for `key`.
    /// Overwrites replace only the stored value; the key storage and the
    /// entry count are untouched. An empty key is a silent no-op.
    pub fn insert(&mut self, key: &str, value: &str) {
        if key.is_empty() {
            return;
        }
        let idx = self.slot_index(key);
        let bucket = self.slots[idx].get_or_insert_with(Bucket::new);
        if bucket.upsert(key, value) {
            self.len += 1;
        }
    }

    /// Borrow the value stored for `key`, or `None` if absent. The borrow
    /// ends at the next mutating call; copy with `to_owned` when the value
    /// must outlive further table operations.
    pub fn find(&self, key: &str) -> Option<&str> {
        self.slots[self.slot_index(key)].as_ref()?.value(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots[self.slot_index(key)]
            .as_ref()
            .map(|b| b.contains(key))
            .unwrap_or(false)
    }

    /// Remove `key` if present; an absent key is a no-op, not an error.
    /// A bucket that empties is dropped immediately and its slot reset.
    pub fn erase(&mut self, key: &str) {
        let idx = self.slot_index(key);
        if let Some(bucket) = self.slots[idx].as_mut() {
            if bucket.remove(key) {
                self.len -= 1;
                if bucket.is_empty() {
                    self.slots[idx] = None;
                }
            }
        }
    }

    /// Drop every bucket and entry but keep the slot array, leaving the
    /// table equivalent to a freshly constructed one with the same slot
    /// count. Safe to call repeatedly.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Number of distinct keys currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed number of top-level slots; never changes after construction.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Human-readable listing of each populated slot index and its live
    /// `(key, value)` pairs. Diagnostic only; the line format is not a
    /// stable contract.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "bucket-hashmap: {} entries across {} slots",
            self.len,
            self.slots.len()
        );
        for (idx, slot) in self.slots.iter().enumerate() {
            if let Some(bucket) = slot {
                let _ = write!(out, "slot {}:", idx);
                for (k, v) in bucket.pairs() {
                    let _ = write!(out, " [key: {}, value: {}]", k, v);
                }
                out.push('\n');
            }
        }
        out
    }

    /// Test-only structural audit: no retained empty bucket, the entry
    /// count matches the live entries, and every entry sits in the slot
    /// its key hashes to.
    #[cfg(test)]
    pub(crate) fn check_consistency(&self) {
        let mut live = 0;
        for (idx, slot) in self.slots.iter().enumerate() {
            if let Some(bucket) = slot {
                assert!(!bucket.is_empty(), "empty bucket retained at slot {}", idx);
                live += bucket.len();
                for (k, _) in bucket.pairs() {
                    assert_eq!(self.slot_index(k), idx, "entry stored in wrong slot");
                }
            }
        }
        assert_eq!(self.len, live, "entry count out of sync with live entries");
    }
}

impl Default for BucketHashMap {
    fn default() -> Self {
        Self::new()
    }
}
