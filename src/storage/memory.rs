//! In-memory collection backend
//!
//! A substitutable fake for tests and embedding; keeps the same
//! absent-vs-empty distinction the durable backends have.

use std::sync::{Mutex, PoisonError};

use crate::core::traits::CollectionBackend;
use crate::utils::error::AppResult;

#[derive(Default)]
pub struct MemoryBackend<T> {
    items: Mutex<Option<Vec<T>>>,
}

impl<T> MemoryBackend<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(None),
        }
    }
}

impl<T: Clone> CollectionBackend<T> for MemoryBackend<T> {
    fn load(&self) -> AppResult<Vec<T>> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.clone().unwrap_or_default())
    }

    fn save(&self, new_items: &[T]) -> AppResult<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        *items = Some(new_items.to_vec());
        Ok(())
    }

    fn exists(&self) -> AppResult<bool> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.is_some())
    }
}
