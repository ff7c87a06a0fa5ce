//! Organizational structure store (slots `direktorat`, `subdirektorat`,
//! `divisi`)
//!
//! Three per-year collections sharing one derived-view surface: distinct
//! sorted names of active entries for a year, plus the set of years any
//! slot knows about.

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;

use crate::core::data::{next_id, StrukturItem};
use crate::core::traits::CollectionBackend;
use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrukturKind {
    Direktorat,
    Subdirektorat,
    Divisi,
}

impl StrukturKind {
    pub fn slot_key(self) -> &'static str {
        match self {
            StrukturKind::Direktorat => "direktorat",
            StrukturKind::Subdirektorat => "subdirektorat",
            StrukturKind::Divisi => "divisi",
        }
    }

    fn label(self) -> &'static str {
        match self {
            StrukturKind::Direktorat => "Direktorat",
            StrukturKind::Subdirektorat => "Subdirektorat",
            StrukturKind::Divisi => "Divisi",
        }
    }
}

pub struct StrukturStore<B: CollectionBackend<StrukturItem>> {
    direktorat: B,
    subdirektorat: B,
    divisi: B,
    write_lock: Mutex<()>,
}

impl<B: CollectionBackend<StrukturItem>> StrukturStore<B> {
    pub fn new(direktorat: B, subdirektorat: B, divisi: B) -> Self {
        Self {
            direktorat,
            subdirektorat,
            divisi,
            write_lock: Mutex::new(()),
        }
    }

    fn backend(&self, kind: StrukturKind) -> &B {
        match kind {
            StrukturKind::Direktorat => &self.direktorat,
            StrukturKind::Subdirektorat => &self.subdirektorat,
            StrukturKind::Divisi => &self.divisi,
        }
    }

    pub fn all(&self, kind: StrukturKind) -> AppResult<Vec<StrukturItem>> {
        self.backend(kind).load()
    }

    pub fn add(&self, kind: StrukturKind, nama: &str, tahun: i32) -> AppResult<StrukturItem> {
        if nama.trim().is_empty() {
            return Err(AppError::validation("Nama is required"));
        }

        let _guard = self.write_guard();
        let backend = self.backend(kind);
        let mut items = backend.load()?;
        let item = StrukturItem {
            id: next_id(items.iter().map(|i| i.id)),
            nama: nama.to_string(),
            tahun,
            created_at: Utc::now(),
            is_active: true,
        };
        items.push(item.clone());
        backend.save(&items)?;
        Ok(item)
    }

    pub fn remove(&self, kind: StrukturKind, id: i64) -> AppResult<()> {
        let _guard = self.write_guard();
        let backend = self.backend(kind);
        let mut items = backend.load()?;

        let pos = items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| AppError::not_found(kind.label()))?;
        items.remove(pos);

        backend.save(&items)
    }

    /// Replace seeded content for one slot, used by the seed command.
    pub fn replace(&self, kind: StrukturKind, items: &[StrukturItem]) -> AppResult<()> {
        let _guard = self.write_guard();
        self.backend(kind).save(items)
    }

    /// Distinct, sorted names of active entries for a year.
    pub fn names_for_year(&self, kind: StrukturKind, tahun: i32) -> AppResult<Vec<String>> {
        let items = self.backend(kind).load()?;
        let names: BTreeSet<String> = items
            .into_iter()
            .filter(|i| i.tahun == tahun && i.is_active)
            .map(|i| i.nama)
            .collect();
        Ok(names.into_iter().collect())
    }

    /// Every year any of the three slots knows about, newest first.
    pub fn available_years(&self) -> AppResult<Vec<i32>> {
        let mut years = BTreeSet::new();
        for kind in [
            StrukturKind::Direktorat,
            StrukturKind::Subdirektorat,
            StrukturKind::Divisi,
        ] {
            for item in self.backend(kind).load()? {
                years.insert(item.tahun);
            }
        }
        Ok(years.into_iter().rev().collect())
    }

    pub fn latest_year(&self) -> AppResult<Option<i32>> {
        Ok(self.available_years()?.first().copied())
    }

    fn write_guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
