//! Metadata stores
//!
//! The slot-file instantiations of the entity-store pattern: document
//! classifications, the GCG checklist, archived document metadata and the
//! per-year organizational structure. Each one seeds defaults on first
//! access and recomputes its derived views from the full collection on
//! every call.

pub mod checklist;
pub mod dokumen;
pub mod klasifikasi;
pub mod seed;
pub mod struktur;

pub use checklist::ChecklistStore;
pub use dokumen::{DokumenDraft, DokumenPatch, DokumenStats, DokumenStore};
pub use klasifikasi::{KlasifikasiPatch, KlasifikasiStore};
pub use struktur::{StrukturKind, StrukturStore};
