//! Flat-file collection backend
//!
//! One JSON array per collection, written pretty-printed with 2-space
//! indentation. A missing file is seeded with `[]` on first load so the
//! collection always has a durable representation afterwards.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::traits::CollectionBackend;
use crate::utils::error::{AppError, AppResult};

pub struct JsonFileBackend<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileBackend<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_file(&self) -> AppResult<()> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.path, "[]")?;
        }
        Ok(())
    }
}

impl<T> CollectionBackend<T> for JsonFileBackend<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> AppResult<Vec<T>> {
        self.ensure_file()?;

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            AppError::Storage(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&self, items: &[T]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn exists(&self) -> AppResult<bool> {
        Ok(self.path.exists())
    }
}
