//! bucket-hashmap: A single-threaded map from string keys to string
//! values, built on a fixed slot array with dense per-slot buckets.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small embeddable key-value store whose memory tracks
//!   occupancy, built in safe, verifiable layers so each piece can be
//!   reasoned about independently.
//! - Layers:
//!   - Bucket: dense entry storage for one slot; linear key scan,
//!     value-only overwrite, capacity-doubling append, swap-remove erase.
//!   - BucketHashMap: public API; fixed slot array, djb2 routing, lazy
//!     bucket creation and eager bucket teardown.
//!
//! Constraints
//! - Single-threaded use: mutation requires `&mut self`, so the compiler
//!   serializes access and rejects aliasing a returned value reference
//!   across a mutation.
//! - The slot count is fixed at construction; there is no table-wide
//!   rehash. Load concentrates in buckets, and scans within a bucket are
//!   linear.
//! - Keys and values are strings; the table owns copies (`Box<str>`, one
//!   allocation each, no spare capacity).
//! - No iteration API; `debug_dump` is the only view into bucket contents
//!   and is diagnostic-only.
//!
//! Why this split?
//! - Localize invariants: the bucket owns density and growth; the table
//!   owns routing, slot lifecycle, and the entry count.
//! - Clear failure boundaries: entry storage is fully built before it is
//!   linked into a bucket, so no partial entry is ever observable.
//!
//! Ownership
//! - The table owns the slot array; each slot optionally owns one bucket;
//!   each bucket owns its entries; each entry owns two strings. Nothing is
//!   shared or reference-counted, and teardown is `Drop` in owner order.
//!   Dropping the table is the whole teardown story; move semantics make
//!   use-after-teardown unrepresentable.
//!
//! Hashing invariants
//! - Routing hashes the raw key bytes with djb2 (`hash::Djb2Hasher`),
//!   never the std `Hash` impl for `str`, so slot selection is
//!   deterministic across runs and processes. Equal keys always share a
//!   slot; unequal keys may collide and are told apart by string equality.
//!
//! Notes and non-goals
//! - Erase swap-removes, so relative entry order within a bucket is not
//!   preserved; no ordering is exposed, none is promised.
//! - An empty key is a silent no-op on insert and an ordinary miss on
//!   lookup and erase; callers cannot distinguish the two.
//! - No resize-on-load-factor: with few slots and many keys, lookups
//!   degrade to linear search.

mod bucket;
pub mod bucket_hash_map;
mod bucket_hash_map_proptest;
pub mod hash;

// Public surface
pub use bucket_hash_map::BucketHashMap;
pub use hash::Djb2Hasher;
