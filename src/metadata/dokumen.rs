//! Archived document metadata store (slot `documentMetadata`)
//!
//! Holds the metadata of every archived document and the views the
//! dashboard filters by: assessment year, checklist aspect, owning
//! directorate and GCG principle. Like the other slot stores the views
//! are plain filters over the full collection, recomputed per call.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use serde::Serialize;

use crate::core::data::{next_id, DokumenItem};
use crate::core::traits::CollectionBackend;
use crate::metadata::seed;
use crate::utils::error::{AppError, AppResult};

/// Caller-supplied fields for archiving a document. Identifier and upload
/// timestamp are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct DokumenDraft {
    pub title: String,
    pub document_number: String,
    pub document_date: String,
    pub description: String,
    pub gcg_principle: String,
    pub document_type: String,
    pub document_category: String,
    pub direktorat: String,
    pub subdirektorat: String,
    pub division: String,
    pub file_name: String,
    pub file_size: u64,
    pub status: String,
    pub confidentiality: String,
    pub year: i32,
    pub uploaded_by: String,
    pub checklist_id: Option<i64>,
    pub aspek: Option<String>,
}

/// Shallow-merge patch for a document entry.
#[derive(Debug, Clone, Default)]
pub struct DokumenPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub gcg_principle: Option<String>,
    pub document_type: Option<String>,
    pub document_category: Option<String>,
    pub direktorat: Option<String>,
    pub status: Option<String>,
    pub confidentiality: Option<String>,
    pub aspek: Option<String>,
}

/// Aggregated counts over one year's documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DokumenStats {
    pub total_documents: usize,
    pub total_size: u64,
    pub by_principle: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
    pub by_direktorat: BTreeMap<String, usize>,
}

pub struct DokumenStore<B: CollectionBackend<DokumenItem>> {
    backend: B,
    write_lock: Mutex<()>,
}

impl<B: CollectionBackend<DokumenItem>> DokumenStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    /// Seed the sample documents when the slot has never been written.
    /// An emptied slot stays empty.
    pub fn ensure_seeded(&self) -> AppResult<()> {
        let _guard = self.write_guard();
        if !self.backend.exists()? {
            self.backend.save(&seed::dokumen_defaults())?;
        }
        Ok(())
    }

    /// Overwrite the slot with the sample documents.
    pub fn reseed(&self) -> AppResult<()> {
        let _guard = self.write_guard();
        self.backend.save(&seed::dokumen_defaults())
    }

    pub fn all(&self) -> AppResult<Vec<DokumenItem>> {
        self.ensure_seeded()?;
        self.backend.load()
    }

    pub fn get(&self, id: i64) -> AppResult<Option<DokumenItem>> {
        Ok(self.all()?.into_iter().find(|d| d.id == id))
    }

    pub fn add(&self, draft: DokumenDraft) -> AppResult<DokumenItem> {
        if draft.title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        self.ensure_seeded()?;

        let _guard = self.write_guard();
        let mut items = self.backend.load()?;
        let item = DokumenItem {
            id: next_id(items.iter().map(|d| d.id)),
            title: draft.title,
            document_number: draft.document_number,
            document_date: draft.document_date,
            description: draft.description,
            gcg_principle: draft.gcg_principle,
            document_type: draft.document_type,
            document_category: draft.document_category,
            direktorat: draft.direktorat,
            subdirektorat: draft.subdirektorat,
            division: draft.division,
            file_name: draft.file_name,
            file_size: draft.file_size,
            status: draft.status,
            confidentiality: draft.confidentiality,
            year: draft.year,
            uploaded_by: draft.uploaded_by,
            upload_date: Utc::now(),
            checklist_id: draft.checklist_id,
            aspek: draft.aspek,
        };
        items.push(item.clone());
        self.backend.save(&items)?;
        Ok(item)
    }

    pub fn update(&self, id: i64, patch: DokumenPatch) -> AppResult<DokumenItem> {
        let _guard = self.write_guard();
        let mut items = self.backend.load()?;

        let item = items
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::not_found("Dokumen"))?;
        if let Some(title) = &patch.title {
            item.title = title.clone();
        }
        if let Some(description) = &patch.description {
            item.description = description.clone();
        }
        if let Some(gcg_principle) = &patch.gcg_principle {
            item.gcg_principle = gcg_principle.clone();
        }
        if let Some(document_type) = &patch.document_type {
            item.document_type = document_type.clone();
        }
        if let Some(document_category) = &patch.document_category {
            item.document_category = document_category.clone();
        }
        if let Some(direktorat) = &patch.direktorat {
            item.direktorat = direktorat.clone();
        }
        if let Some(status) = &patch.status {
            item.status = status.clone();
        }
        if let Some(confidentiality) = &patch.confidentiality {
            item.confidentiality = confidentiality.clone();
        }
        if let Some(aspek) = &patch.aspek {
            item.aspek = Some(aspek.clone());
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
            .position(|d| d.id == id)
            .ok_or_else(|| AppError::not_found("Dokumen"))?;
        items.remove(pos);

        self.backend.save(&items)
    }

    /// Documents archived for one assessment year.
    pub fn by_year(&self, year: i32) -> AppResult<Vec<DokumenItem>> {
        self.filtered(|d| d.year == year)
    }

    /// Documents fulfilling one checklist aspect.
    pub fn by_aspek(&self, aspek: &str) -> AppResult<Vec<DokumenItem>> {
        self.filtered(|d| d.aspek.as_deref() == Some(aspek))
    }

    /// Documents owned by one directorate.
    pub fn by_direktorat(&self, direktorat: &str) -> AppResult<Vec<DokumenItem>> {
        self.filtered(|d| d.direktorat == direktorat)
    }

    /// Documents archived under one GCG principle.
    pub fn by_principle(&self, principle: &str) -> AppResult<Vec<DokumenItem>> {
        self.filtered(|d| d.gcg_principle == principle)
    }

    /// Count and size totals for one year, grouped by principle, document
    /// type and directorate.
    pub fn year_stats(&self, year: i32) -> AppResult<DokumenStats> {
        let docs = self.by_year(year)?;
        let mut stats = DokumenStats {
            total_documents: docs.len(),
            ..Default::default()
        };
        for doc in &docs {
            stats.total_size += doc.file_size;
            *stats.by_principle.entry(doc.gcg_principle.clone()).or_default() += 1;
            *stats.by_type.entry(doc.document_type.clone()).or_default() += 1;
            *stats.by_direktorat.entry(doc.direktorat.clone()).or_default() += 1;
        }
        Ok(stats)
    }

    fn filtered(&self, keep: impl Fn(&DokumenItem) -> bool) -> AppResult<Vec<DokumenItem>> {
        let items = self.all()?;
        Ok(items.into_iter().filter(|d| keep(d)).collect())
    }

    fn write_guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
