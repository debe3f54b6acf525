//! In-memory authoritative store.

/// Item quantities, mutation rules and file synchronization.
pub mod store;
