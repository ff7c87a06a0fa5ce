//! GCG assessment checklist store (slot `checklistGCG`)
//!
//! Checklist rows are grouped by aspek and scoped to an assessment year.
//! Year views are plain attribute filters over the full collection.

use std::sync::{Mutex, PoisonError};

use crate::core::data::{next_id, ChecklistItem};
use crate::core::traits::CollectionBackend;
use crate::metadata::seed;
use crate::utils::error::{AppError, AppResult};

pub struct ChecklistStore<B: CollectionBackend<ChecklistItem>> {
    backend: B,
    write_lock: Mutex<()>,
}

impl<B: CollectionBackend<ChecklistItem>> ChecklistStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    /// Seed default rows for `tahun` when the slot has never been written.
    pub fn ensure_seeded(&self, tahun: i32) -> AppResult<()> {
        let _guard = self.write_guard();
        if !self.backend.exists()? {
            self.backend.save(&seed::checklist_defaults(tahun))?;
        }
        Ok(())
    }

    /// Overwrite the slot with the default rows for `tahun`.
    pub fn reseed(&self, tahun: i32) -> AppResult<()> {
        let _guard = self.write_guard();
        self.backend.save(&seed::checklist_defaults(tahun))
    }

    pub fn all(&self) -> AppResult<Vec<ChecklistItem>> {
        self.backend.load()
    }

    pub fn for_year(&self, tahun: i32) -> AppResult<Vec<ChecklistItem>> {
        let items = self.backend.load()?;
        Ok(items.into_iter().filter(|i| i.tahun == tahun).collect())
    }

    /// Populate a new assessment year with the default rows. A year that
    /// already has rows is left untouched.
    pub fn init_year(&self, tahun: i32) -> AppResult<()> {
        let _guard = self.write_guard();
        let mut items = self.backend.load()?;
        if items.iter().any(|i| i.tahun == tahun) {
            return Ok(());
        }

        let base = next_id(items.iter().map(|i| i.id));
        for (offset, row) in seed::checklist_defaults(tahun).into_iter().enumerate() {
            items.push(ChecklistItem {
                id: base + offset as i64,
                ..row
            });
        }
        self.backend.save(&items)
    }

    pub fn add(&self, aspek: &str, deskripsi: &str, tahun: i32) -> AppResult<ChecklistItem> {
        if aspek.trim().is_empty() {
            return Err(AppError::validation("Aspek is required"));
        }

        let _guard = self.write_guard();
        let mut items = self.backend.load()?;
        let item = ChecklistItem {
            id: next_id(items.iter().map(|i| i.id)),
            aspek: aspek.to_string(),
            deskripsi: deskripsi.to_string(),
            tahun,
        };
        items.push(item.clone());
        self.backend.save(&items)?;
        Ok(item)
    }

    pub fn edit(
        &self,
        id: i64,
        aspek: &str,
        deskripsi: &str,
        tahun: i32,
    ) -> AppResult<ChecklistItem> {
        let _guard = self.write_guard();
        let mut items = self.backend.load()?;

        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::not_found("Checklist"))?;
        item.aspek = aspek.to_string();
        item.deskripsi = deskripsi.to_string();
        item.tahun = tahun;
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
            .ok_or_else(|| AppError::not_found("Checklist"))?;
        items.remove(pos);

        self.backend.save(&items)
    }

    /// Add a new aspek for a year as a single placeholder row.
    pub fn add_aspek(&self, aspek: &str, tahun: i32) -> AppResult<ChecklistItem> {
        let deskripsi = format!("Item checklist untuk {}", aspek);
        self.add(aspek, &deskripsi, tahun)
    }

    /// Rename an aspek across all of one year's rows.
    pub fn rename_aspek(&self, old: &str, new: &str, tahun: i32) -> AppResult<usize> {
        if new.trim().is_empty() {
            return Err(AppError::validation("Aspek is required"));
        }

        let _guard = self.write_guard();
        let mut items = self.backend.load()?;
        let mut renamed = 0;
        for item in items.iter_mut() {
            if item.aspek == old && item.tahun == tahun {
                item.aspek = new.to_string();
                renamed += 1;
            }
        }
        if renamed > 0 {
            self.backend.save(&items)?;
        }
        Ok(renamed)
    }

    /// Drop every row of an aspek within one year.
    pub fn delete_aspek(&self, aspek: &str, tahun: i32) -> AppResult<usize> {
        let _guard = self.write_guard();
        let mut items = self.backend.load()?;
        let before = items.len();
        items.retain(|i| !(i.aspek == aspek && i.tahun == tahun));
        let dropped = before - items.len();
        if dropped > 0 {
            self.backend.save(&items)?;
        }
        Ok(dropped)
    }

    fn write_guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
