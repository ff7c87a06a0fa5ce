//! Named-slot collection backend
//!
//! Several small collections share one key-value JSON file: slot name in,
//! serialized collection out. This is the durable rendition of the web
//! client's persistent storage slots (`klasifikasiGCG`, `checklistGCG`,
//! `direktorat`, ...), so collections that used to live browser-side keep
//! the same keying scheme here.

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::traits::CollectionBackend;
use crate::utils::error::{AppError, AppResult};

/// The shared key-value file. Slot updates rewrite the whole file, so a
/// single file-level mutex serializes them across slots.
pub struct SlotFile {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SlotFile {
    pub fn new(path: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            path: path.into(),
            lock: Mutex::new(()),
        })
    }

    fn read_map(&self) -> AppResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(AppError::Storage(format!(
                "{}: expected a JSON object of slots",
                self.path.display()
            ))),
            Err(e) => Err(AppError::Storage(format!("{}: {}", self.path.display(), e))),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(map.clone()))
            .map_err(|e| AppError::Storage(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A view of one named slot inside a [`SlotFile`].
pub struct SlotBackend<T> {
    file: Arc<SlotFile>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SlotBackend<T> {
    pub fn new(file: Arc<SlotFile>, key: impl Into<String>) -> Self {
        Self {
            file,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T> CollectionBackend<T> for SlotBackend<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> AppResult<Vec<T>> {
        let _guard = self.file.guard();
        let map = self.file.read_map()?;
        match map.get(&self.key) {
            None => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                AppError::Storage(format!("slot '{}': {}", self.key, e))
            }),
        }
    }

    fn save(&self, items: &[T]) -> AppResult<()> {
        let _guard = self.file.guard();
        let mut map = self.file.read_map()?;
        let value = serde_json::to_value(items).map_err(|e| AppError::Storage(e.to_string()))?;
        map.insert(self.key.clone(), value);
        self.file.write_map(&map)
    }

    fn exists(&self) -> AppResult<bool> {
        let _guard = self.file.guard();
        Ok(self.file.read_map()?.contains_key(&self.key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::ChecklistItem;
    use crate::testing::scratch_dir;

    #[test]
    fn absent_slot_loads_empty() {
        let dir = scratch_dir("slot-absent");
        let file = SlotFile::new(dir.join("metadata.json"));
        let backend: SlotBackend<ChecklistItem> = SlotBackend::new(file, "checklistGCG");

        assert!(!backend.exists().unwrap());
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn slots_in_one_file_stay_independent() {
        let dir = scratch_dir("slot-independent");
        let file = SlotFile::new(dir.join("metadata.json"));
        let checklist: SlotBackend<ChecklistItem> = SlotBackend::new(file.clone(), "checklistGCG");
        let other: SlotBackend<ChecklistItem> = SlotBackend::new(file, "checklistLama");

        let item = ChecklistItem {
            id: 1,
            aspek: "Direksi".to_string(),
            deskripsi: "Board Manual".to_string(),
            tahun: 2024,
        };
        checklist.save(std::slice::from_ref(&item)).unwrap();

        assert!(checklist.exists().unwrap());
        assert!(!other.exists().unwrap());
        assert_eq!(checklist.load().unwrap(), vec![item]);

        other.save(&[]).unwrap();
        // Writing the second slot leaves the first untouched.
        assert_eq!(checklist.load().unwrap().len(), 1);
        assert!(other.exists().unwrap());
    }

    #[test]
    fn non_object_file_is_a_storage_error() {
        let dir = scratch_dir("slot-corrupt");
        let path = dir.join("metadata.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let backend: SlotBackend<ChecklistItem> = SlotBackend::new(SlotFile::new(path), "checklistGCG");
        assert!(matches!(backend.load().unwrap_err(), AppError::Storage(_)));
    }
}
