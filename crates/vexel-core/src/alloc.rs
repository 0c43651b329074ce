//! Optimized allocation and collection types for Vexel.
//!
//! Re-exports hash collections backed by AHash, which is considerably faster
//! than the SipHash default for the small keys layout code uses.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
