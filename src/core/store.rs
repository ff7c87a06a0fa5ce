//! Generic entity store: CRUD over one persisted collection
//!
//! Every mutation is a full read-modify-write cycle against the backing
//! store. Mutations take a per-store mutex so two writers in the same
//! process cannot lose each other's cycle; reads go straight to storage.

use std::sync::{Mutex, PoisonError};

use crate::core::data::{next_id, Record, RecordDraft, RecordPatch};
use crate::core::traits::CollectionBackend;
use crate::utils::error::{AppError, AppResult};

pub struct EntityStore<B: CollectionBackend<Record>> {
    label: &'static str,
    backend: B,
    write_lock: Mutex<()>,
}

impl<B: CollectionBackend<Record>> EntityStore<B> {
    /// `label` is the entity display name used in not-found messages,
    /// e.g. "Divisi".
    pub fn new(label: &'static str, backend: B) -> Self {
        Self {
            label,
            backend,
            write_lock: Mutex::new(()),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Full collection, in storage order.
    pub fn list(&self) -> AppResult<Vec<Record>> {
        self.backend.load()
    }

    /// Linear scan by identifier.
    pub fn get(&self, id: i64) -> AppResult<Option<Record>> {
        let records = self.backend.load()?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    /// Validate, assign an identifier and creation timestamp, append and
    /// persist. Validation fails before anything touches storage.
    pub fn create(&self, draft: RecordDraft) -> AppResult<Record> {
        if draft.nama.trim().is_empty() {
            return Err(AppError::validation("Nama is required"));
        }

        let _guard = self.write_guard();
        let mut records = self.backend.load()?;
        let record = Record::new(next_id(records.iter().map(|r| r.id)), draft.nama);
        records.push(record.clone());
        self.backend.save(&records)?;
        Ok(record)
    }

    /// Shallow-merge the patch into the matched record and persist.
    pub fn update(&self, id: i64, patch: RecordPatch) -> AppResult<Record> {
        let _guard = self.write_guard();
        let mut records = self.backend.load()?;

        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(self.label))?;
        record.apply(&patch);
        let updated = record.clone();

        self.backend.save(&records)?;
        Ok(updated)
    }

    /// Remove the matched record and persist.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        let _guard = self.write_guard();
        let mut records = self.backend.load()?;

        let pos = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(self.label))?;
        records.remove(pos);

        self.backend.save(&records)?;
        Ok(())
    }

    fn write_guard(&self) -> std::sync::MutexGuard<'_, ()> {
        // A poisoned lock only means another writer panicked mid-cycle;
        // the collection on disk is still the unit of truth.
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryBackend;

    fn store() -> EntityStore<MemoryBackend<Record>> {
        EntityStore::new("Divisi", MemoryBackend::new())
    }

    #[test]
    fn created_record_is_retrievable() {
        let store = store();
        let created = store
            .create(RecordDraft {
                nama: "Divisi Umum".to_string(),
            })
            .unwrap();

        let found = store.get(created.id).unwrap().unwrap();
        assert_eq!(found, created);
        assert!(found.is_active);
    }

    #[test]
    fn create_rejects_empty_nama_before_persisting() {
        let store = store();
        let err = store.create(RecordDraft { nama: "  ".to_string() }).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Nama is required");
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn rapid_creates_get_distinct_ids() {
        let store = store();
        let mut ids: Vec<i64> = (0..20)
            .map(|i| {
                store
                    .create(RecordDraft {
                        nama: format!("Divisi {}", i),
                    })
                    .unwrap()
                    .id
            })
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn update_merges_and_preserves_created_at() {
        let store = store();
        let created = store
            .create(RecordDraft {
                nama: "Divisi Umum".to_string(),
            })
            .unwrap();

        let patch = RecordPatch {
            nama: Some("Divisi Baru".to_string()),
            is_active: None,
        };
        let updated = store.update(created.id, patch.clone()).unwrap();
        assert_eq!(updated.nama, "Divisi Baru");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);

        // Applying the same patch again yields the same record.
        let again = store.update(created.id, patch).unwrap();
        assert_eq!(again, updated);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = store();
        let err = store
            .update(999_999, RecordPatch::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Divisi not found");
    }

    #[test]
    fn deleted_record_is_gone() {
        let store = store();
        let created = store
            .create(RecordDraft {
                nama: "Divisi Umum".to_string(),
            })
            .unwrap();

        store.delete(created.id).unwrap();
        assert!(store.get(created.id).unwrap().is_none());
        assert!(matches!(
            store.delete(created.id).unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[test]
    fn list_reflects_creates_minus_deletes() {
        let store = store();
        let ids: Vec<i64> = (0..5)
            .map(|i| {
                store
                    .create(RecordDraft {
                        nama: format!("Direksi {}", i),
                    })
                    .unwrap()
                    .id
            })
            .collect();

        store.delete(ids[1]).unwrap();
        store.delete(ids[3]).unwrap();

        let remaining = store.list().unwrap();
        assert_eq!(remaining.len(), 3);
        // Storage order is insertion order.
        assert_eq!(
            remaining.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![ids[0], ids[2], ids[4]]
        );
    }
}
