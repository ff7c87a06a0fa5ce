//! Default data seeded into absent metadata slots

use chrono::Utc;

use crate::core::data::{ChecklistItem, DokumenItem, KlasifikasiItem, KlasifikasiTipe, StrukturItem};

const PRINSIP: &[&str] = &[
    "Transparansi",
    "Akuntabilitas",
    "Responsibilitas",
    "Independensi",
    "Kesetaraan",
];

const JENIS: &[&str] = &[
    "Kebijakan",
    "Laporan",
    "Risalah",
    "Dokumentasi",
    "Sosialisasi",
    "Peraturan",
    "SOP",
    "Pedoman",
    "Manual",
    "Piagam",
    "Surat Keputusan",
    "Surat Edaran",
    "Nota Dinas",
    "Lainnya",
];

const KATEGORI: &[&str] = &[
    "Laporan Keuangan",
    "Laporan Manajemen",
    "Laporan Audit",
    "Laporan Triwulan",
    "Laporan Tahunan",
    "Risalah Rapat Direksi",
    "Risalah Rapat Komisaris",
    "Risalah Rapat Komite",
    "Code of Conduct",
    "Board Manual",
    "Pedoman Tata Kelola",
    "Kebijakan Manajemen Risiko",
    "Kebijakan Pengendalian Intern",
    "LHKPN",
    "WBS",
    "CV Dewan",
    "Surat Pernyataan",
    "Pakta Integritas",
    "Lainnya",
];

const CHECKLIST: &[(&str, &str)] = &[
    (
        "Komitmen",
        "Pedoman Tata Kelola Perusahaan yang Baik (CoCG)",
    ),
    ("Komitmen", "Code of Conduct dan bukti sosialisasinya"),
    ("Komitmen", "Pakta Integritas Direksi dan Dewan Komisaris"),
    ("RUPS", "Risalah Rapat Umum Pemegang Saham"),
    ("RUPS", "Laporan Tahunan yang disahkan RUPS"),
    ("Dewan Komisaris", "Board Manual Dewan Komisaris"),
    ("Dewan Komisaris", "Risalah Rapat Dewan Komisaris"),
    ("Dewan Komisaris", "Program kerja dan laporan pengawasan Dewan Komisaris"),
    ("Direksi", "Board Manual Direksi"),
    ("Direksi", "Risalah Rapat Direksi"),
    ("Direksi", "Laporan Manajemen triwulanan dan tahunan"),
    ("Pengungkapan", "Laporan Harta Kekayaan Penyelenggara Negara (LHKPN)"),
    ("Pengungkapan", "Kebijakan Whistleblowing System (WBS)"),
    ("Pengungkapan", "Publikasi informasi perusahaan kepada pemangku kepentingan"),
];

const DIREKTORAT: &[&str] = &[
    "Direktorat Keuangan",
    "Direktorat Operasional",
    "Direktorat SDM",
    "Direktorat Teknologi Informasi",
    "Direktorat Pemasaran",
    "Direktorat Hukum",
    "Direktorat Audit",
    "Direktorat Risk Management",
];

/// The 38 default document classifications (5 principles, 14 document
/// types, 19 categories).
pub fn klasifikasi_defaults() -> Vec<KlasifikasiItem> {
    let now = Utc::now();
    let groups = [
        (KlasifikasiTipe::Prinsip, PRINSIP),
        (KlasifikasiTipe::Jenis, JENIS),
        (KlasifikasiTipe::Kategori, KATEGORI),
    ];

    let mut id = 0;
    let mut items = Vec::new();
    for (tipe, names) in groups {
        for nama in names {
            id += 1;
            items.push(KlasifikasiItem {
                id,
                nama: (*nama).to_string(),
                tipe,
                created_at: now,
                is_active: true,
            });
        }
    }
    items
}

/// Default GCG checklist rows for one assessment year.
pub fn checklist_defaults(tahun: i32) -> Vec<ChecklistItem> {
    CHECKLIST
        .iter()
        .enumerate()
        .map(|(i, (aspek, deskripsi))| ChecklistItem {
            id: i as i64 + 1,
            aspek: (*aspek).to_string(),
            deskripsi: (*deskripsi).to_string(),
            tahun,
        })
        .collect()
}

/// Sample archived documents, one per document lifecycle shape: a policy
/// fulfilling a checklist item, a published report and a confidential
/// meeting record.
pub fn dokumen_defaults() -> Vec<DokumenItem> {
    let now = Utc::now();
    let base = |id: i64| DokumenItem {
        id,
        title: String::new(),
        document_number: String::new(),
        document_date: String::new(),
        description: String::new(),
        gcg_principle: String::new(),
        document_type: String::new(),
        document_category: String::new(),
        direktorat: String::new(),
        subdirektorat: String::new(),
        division: String::new(),
        file_name: String::new(),
        file_size: 0,
        status: "published".to_string(),
        confidentiality: "public".to_string(),
        year: 2024,
        uploaded_by: "superadmin".to_string(),
        upload_date: now,
        checklist_id: None,
        aspek: None,
    };

    vec![
        DokumenItem {
            title: "Pedoman Tata Kelola Perusahaan yang Baik (CoCG)".to_string(),
            document_number: "GCG/COCG/2024/001".to_string(),
            document_date: "2024-01-15".to_string(),
            description: "Pedoman implementasi tata kelola perusahaan yang baik".to_string(),
            gcg_principle: "Transparansi".to_string(),
            document_type: "Kebijakan".to_string(),
            document_category: "Code of Conduct".to_string(),
            direktorat: "Direktorat SDM".to_string(),
            division: "Divisi Training & Development".to_string(),
            file_name: "Pedoman_CoCG_2024.pdf".to_string(),
            file_size: 2_048_576,
            checklist_id: Some(1),
            aspek: Some("Komitmen".to_string()),
            ..base(1)
        },
        DokumenItem {
            title: "Laporan Keuangan Tahunan 2024".to_string(),
            document_number: "GCG/LKT/2024/001".to_string(),
            document_date: "2024-03-31".to_string(),
            description: "Laporan keuangan audited untuk tahun buku 2024".to_string(),
            gcg_principle: "Akuntabilitas".to_string(),
            document_type: "Laporan".to_string(),
            document_category: "Laporan Keuangan".to_string(),
            direktorat: "Direktorat Keuangan".to_string(),
            division: "Divisi Keuangan".to_string(),
            file_name: "Laporan_Keuangan_2024.pdf".to_string(),
            file_size: 5_120_000,
            aspek: Some("RUPS".to_string()),
            ..base(2)
        },
        DokumenItem {
            title: "Risalah Rapat Direksi Januari 2024".to_string(),
            document_number: "GCG/RRD/2024/001".to_string(),
            document_date: "2024-01-25".to_string(),
            description: "Risalah rapat direksi bulanan untuk bulan Januari 2024".to_string(),
            gcg_principle: "Responsibilitas".to_string(),
            document_type: "Risalah".to_string(),
            document_category: "Risalah Rapat Direksi".to_string(),
            direktorat: "Direktorat Operasional".to_string(),
            division: "Divisi Operasional".to_string(),
            file_name: "Risalah_Direksi_Jan_2024.pdf".to_string(),
            file_size: 1_536_000,
            status: "draft".to_string(),
            confidentiality: "confidential".to_string(),
            aspek: Some("Direksi".to_string()),
            ..base(3)
        },
    ]
}

/// Default directorate entries for one year.
pub fn direktorat_defaults(tahun: i32) -> Vec<StrukturItem> {
    let now = Utc::now();
    DIREKTORAT
        .iter()
        .enumerate()
        .map(|(i, nama)| StrukturItem {
            id: i as i64 + 1,
            nama: (*nama).to_string(),
            tahun,
            created_at: now,
            is_active: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn klasifikasi_defaults_cover_all_groups() {
        let items = klasifikasi_defaults();
        assert_eq!(items.len(), 38);

        let prinsip = items
            .iter()
            .filter(|i| i.tipe == KlasifikasiTipe::Prinsip)
            .count();
        assert_eq!(prinsip, 5);
        assert!(items.iter().all(|i| i.is_active));

        let mut ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 38);
    }

    #[test]
    fn dokumen_defaults_reference_seeded_collections() {
        let docs = dokumen_defaults();
        assert_eq!(docs.len(), 3);

        let mut ids: Vec<i64> = docs.iter().map(|d| d.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        let prinsip = klasifikasi_defaults();
        assert!(docs.iter().all(|d| prinsip
            .iter()
            .any(|k| k.tipe == KlasifikasiTipe::Prinsip && k.nama == d.gcg_principle)));
        assert!(docs
            .iter()
            .all(|d| DIREKTORAT.contains(&d.direktorat.as_str())));
    }

    #[test]
    fn checklist_defaults_carry_the_year() {
        let items = checklist_defaults(2024);
        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i.tahun == 2024));
    }
}
