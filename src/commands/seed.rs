// Seed command - initialize metadata slots with default data

use anyhow::Result;
use chrono::{Datelike, Utc};

use crate::cli::SeedArgs;
use crate::config::Config;
use crate::metadata::{seed, StrukturKind};
use crate::utils::{print_success, print_warning};
use crate::Hub;

pub fn handle_seed_command(config: Config, args: &SeedArgs) -> Result<()> {
    let hub = Hub::open(&config)?;
    let tahun = Utc::now().year();

    if args.force {
        hub.klasifikasi.reseed()?;
        hub.checklist.reseed(tahun)?;
        hub.dokumen.reseed()?;
        hub.struktur
            .replace(StrukturKind::Direktorat, &seed::direktorat_defaults(tahun))?;
        print_warning("Existing metadata slots were overwritten");
    } else {
        hub.klasifikasi.ensure_seeded()?;
        hub.checklist.ensure_seeded(tahun)?;
        hub.dokumen.ensure_seeded()?;
        if hub.struktur.all(StrukturKind::Direktorat)?.is_empty() {
            hub.struktur
                .replace(StrukturKind::Direktorat, &seed::direktorat_defaults(tahun))?;
        }
    }

    let klasifikasi = hub.klasifikasi.all()?.len();
    let checklist = hub.checklist.for_year(tahun)?.len();
    let dokumen = hub.dokumen.all()?.len();
    let direktorat = hub.struktur.names_for_year(StrukturKind::Direktorat, tahun)?.len();
    print_success(&format!(
        "Seeded metadata for {}: {} klasifikasi, {} checklist items, {} dokumen, {} direktorat",
        tahun, klasifikasi, checklist, dokumen, direktorat
    ));

    Ok(())
}
