//! gcg-hub - corporate governance document hub
//!
//! This library provides the storage core of the hub: file-backed entity
//! collections (direksi, divisi) served over JSON-over-HTTP, plus the
//! slot-file metadata stores (klasifikasi, checklist, dokumen, struktur)
//! the admin dashboard is built on.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod metadata;
pub mod server;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{
        ChecklistItem, DokumenItem, KlasifikasiItem, KlasifikasiTipe, Record, RecordDraft,
        RecordPatch, StrukturItem,
    },
    store::EntityStore,
    traits::CollectionBackend,
};
pub use crate::server::RecordStore;
pub use crate::utils::error::{AppError, AppResult};

use crate::config::Config;
use crate::metadata::{ChecklistStore, DokumenStore, KlasifikasiStore, StrukturKind, StrukturStore};
use crate::storage::{JsonFileBackend, SlotBackend, SlotFile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// All stores of one hub deployment, opened against one data directory.
///
/// The stores are constructed here and handed to their consumers, so a
/// test (or an embedder) can build the same consumers around in-memory
/// backends instead.
pub struct Hub {
    pub direksi: Arc<RecordStore>,
    pub divisi: Arc<RecordStore>,
    pub klasifikasi: KlasifikasiStore<SlotBackend<KlasifikasiItem>>,
    pub checklist: ChecklistStore<SlotBackend<ChecklistItem>>,
    pub dokumen: DokumenStore<SlotBackend<DokumenItem>>,
    pub struktur: StrukturStore<SlotBackend<StrukturItem>>,
}

impl Hub {
    pub fn open(config: &Config) -> AppResult<Self> {
        config.ensure_data_dir_exists()?;
        let slots = SlotFile::new(config.metadata_path());

        Ok(Self {
            direksi: Arc::new(EntityStore::new(
                "Direksi",
                JsonFileBackend::new(config.collection_path("direksi")),
            )),
            divisi: Arc::new(EntityStore::new(
                "Divisi",
                JsonFileBackend::new(config.collection_path("divisi")),
            )),
            klasifikasi: KlasifikasiStore::new(SlotBackend::new(slots.clone(), "klasifikasiGCG")),
            checklist: ChecklistStore::new(SlotBackend::new(slots.clone(), "checklistGCG")),
            dokumen: DokumenStore::new(SlotBackend::new(slots.clone(), "documentMetadata")),
            struktur: StrukturStore::new(
                SlotBackend::new(slots.clone(), StrukturKind::Direktorat.slot_key()),
                SlotBackend::new(slots.clone(), StrukturKind::Subdirektorat.slot_key()),
                SlotBackend::new(slots, StrukturKind::Divisi.slot_key()),
            ),
        })
    }

    /// Application router over this hub's entity stores.
    pub fn router(&self) -> axum::Router {
        server::build_router(self.direksi.clone(), self.divisi.clone())
    }
}
