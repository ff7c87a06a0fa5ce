//! Core data structures for the document hub
//!
//! Every collection persists as one JSON array; the shapes here mirror the
//! wire format exactly (camelCase field names, ISO-8601 timestamps).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server-side entity record (board members, divisions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    pub nama: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Caller-supplied fields for creating a [`Record`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordDraft {
    pub nama: String,
}

/// Shallow-merge patch for updating a [`Record`]. Absent fields keep
/// their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    pub nama: Option<String>,
    pub is_active: Option<bool>,
}

/// Document classification kind (GCG principle, document type, category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KlasifikasiTipe {
    Prinsip,
    Jenis,
    Kategori,
}

/// One document classification entry, slot `klasifikasiGCG`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KlasifikasiItem {
    pub id: i64,
    pub nama: String,
    pub tipe: KlasifikasiTipe,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// One GCG checklist row, slot `checklistGCG`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: i64,
    pub aspek: String,
    pub deskripsi: String,
    pub tahun: i32,
}

/// Archived document metadata, slot `documentMetadata`.
///
/// Only the descriptive side of an upload is kept; the file itself lives
/// outside the hub and is referenced by name and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DokumenItem {
    pub id: i64,
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
    pub upload_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspek: Option<String>,
}

/// One organizational structure entry (directorate, sub-directorate or
/// division), kept per year in its own slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrukturItem {
    pub id: i64,
    pub nama: String,
    pub tahun: i32,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Assign the next identifier for a collection.
///
/// The candidate is the current millisecond timestamp; when the collection
/// already holds an id at or past the candidate (rapid creates within one
/// millisecond, or clock skew) the result is clamped to max+1 so ids stay
/// unique and monotonic within the collection.
pub fn next_id(existing: impl IntoIterator<Item = i64>) -> i64 {
    let candidate = Utc::now().timestamp_millis();
    match existing.into_iter().max() {
        Some(max) if max >= candidate => max + 1,
        _ => candidate,
    }
}

impl Record {
    pub fn new(id: i64, nama: String) -> Self {
        Self {
            id,
            nama,
            created_at: Utc::now(),
            is_active: true,
        }
    }

    /// Shallow merge of the named patch fields, per the update contract.
    pub fn apply(&mut self, patch: &RecordPatch) {
        if let Some(nama) = &patch.nama {
            self.nama = nama.clone();
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.nama, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_clamps_past_existing_ids() {
        let now = Utc::now().timestamp_millis();
        let taken = now + 10_000;
        assert_eq!(next_id([1, taken, 42]), taken + 1);
    }

    #[test]
    fn next_id_for_empty_collection_is_timestamp_scale() {
        let before = Utc::now().timestamp_millis();
        let id = next_id([]);
        assert!(id >= before);
    }

    #[test]
    fn patch_merges_only_named_fields() {
        let mut record = Record::new(1, "Divisi Umum".to_string());
        let created = record.created_at;
        record.apply(&RecordPatch {
            nama: Some("Divisi Baru".to_string()),
            is_active: None,
        });
        assert_eq!(record.nama, "Divisi Baru");
        assert!(record.is_active);
        assert_eq!(record.created_at, created);
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = Record::new(7, "Direktorat Keuangan".to_string());
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value.get("isActive"), Some(&serde_json::Value::Bool(true)));
    }
}
