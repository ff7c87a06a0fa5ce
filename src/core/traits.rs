//! Core trait definitions for collection storage
//!
//! A backing store owns the durable bytes of exactly one collection: load
//! the whole collection, save the whole collection. There are no partial
//! writes and no indices, so any medium that can round-trip a JSON array
//! (a flat file, a named slot in a key-value file, an in-memory fake for
//! tests) can stand behind a store.

use crate::utils::error::AppResult;

/// Storage operations for one named collection.
pub trait CollectionBackend<T> {
    /// Load the full collection, in storage order. A backend with no
    /// durable content yet yields the empty collection.
    fn load(&self) -> AppResult<Vec<T>>;

    /// Replace the durable collection with `items`.
    fn save(&self, items: &[T]) -> AppResult<()>;

    /// Whether the backing medium has been written at all. Distinguishes
    /// "never seeded" from "seeded but emptied".
    fn exists(&self) -> AppResult<bool>;
}
