//! Core storage layer
//!
//! Data shapes, the backend trait and the generic entity store that every
//! collection in the hub is built on.

pub mod data;
pub mod store;
pub mod traits;
