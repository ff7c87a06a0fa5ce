//! Document classification store (slot `klasifikasiGCG`)
//!
//! Carries the three classification groups used when archiving documents:
//! GCG principles, document types and document categories. The grouped
//! views are recomputed from the full collection on every call; there is
//! no cached index to invalidate.

use std::sync::{Mutex, PoisonError};

use crate::core::data::{next_id, KlasifikasiItem, KlasifikasiTipe};
use crate::core::traits::CollectionBackend;
use crate::metadata::seed;
use crate::utils::error::{AppError, AppResult};

/// Shallow-merge patch for a classification entry.
#[derive(Debug, Clone, Default)]
pub struct KlasifikasiPatch {
    pub nama: Option<String>,
    pub tipe: Option<KlasifikasiTipe>,
    pub is_active: Option<bool>,
}

pub struct KlasifikasiStore<B: CollectionBackend<KlasifikasiItem>> {
    backend: B,
    write_lock: Mutex<()>,
}

impl<B: CollectionBackend<KlasifikasiItem>> KlasifikasiStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    /// Seed the default classifications when the slot has never been
    /// written. An emptied slot stays empty.
    pub fn ensure_seeded(&self) -> AppResult<()> {
        let _guard = self.write_guard();
        if !self.backend.exists()? {
            self.backend.save(&seed::klasifikasi_defaults())?;
        }
        Ok(())
    }

    /// Overwrite the slot with the default classifications.
    pub fn reseed(&self) -> AppResult<()> {
        let _guard = self.write_guard();
        self.backend.save(&seed::klasifikasi_defaults())
    }

    pub fn all(&self) -> AppResult<Vec<KlasifikasiItem>> {
        self.ensure_seeded()?;
        self.backend.load()
    }

    pub fn add(&self, nama: &str, tipe: KlasifikasiTipe) -> AppResult<KlasifikasiItem> {
        if nama.trim().is_empty() {
            return Err(AppError::validation("Nama is required"));
        }
        self.ensure_seeded()?;

        let _guard = self.write_guard();
        let mut items = self.backend.load()?;
        let item = KlasifikasiItem {
            id: next_id(items.iter().map(|i| i.id)),
            nama: nama.to_string(),
            tipe,
            created_at: chrono::Utc::now(),
            is_active: true,
        };
        items.push(item.clone());
        self.backend.save(&items)?;
        Ok(item)
    }

    pub fn update(&self, id: i64, patch: KlasifikasiPatch) -> AppResult<KlasifikasiItem> {
        let _guard = self.write_guard();
        let mut items = self.backend.load()?;

        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::not_found("Klasifikasi"))?;
        if let Some(nama) = &patch.nama {
            item.nama = nama.clone();
        }
        if let Some(tipe) = patch.tipe {
            item.tipe = tipe;
        }
        if let Some(is_active) = patch.is_active {
            item.is_active = is_active;
        }
        let updated = item.clone();

        self.backend.save(&items)?;
        Ok(updated)
    }

    pub fn remove(&self, id: i64) -> AppResult<()> {
        let _guard = self.write_guard();
        let mut items = self.backend.load()?;

        let pos = items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| AppError::not_found("Klasifikasi"))?;
        items.remove(pos);

        self.backend.save(&items)
    }

    /// Active GCG principle names.
    pub fn prinsip(&self) -> AppResult<Vec<String>> {
        self.names_of(KlasifikasiTipe::Prinsip)
    }

    /// Active document type names.
    pub fn jenis(&self) -> AppResult<Vec<String>> {
        self.names_of(KlasifikasiTipe::Jenis)
    }

    /// Active document category names.
    pub fn kategori(&self) -> AppResult<Vec<String>> {
        self.names_of(KlasifikasiTipe::Kategori)
    }

    fn names_of(&self, tipe: KlasifikasiTipe) -> AppResult<Vec<String>> {
        let items = self.all()?;
        Ok(items
            .into_iter()
            .filter(|i| i.tipe == tipe && i.is_active)
            .map(|i| i.nama)
            .collect())
    }

    fn write_guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
