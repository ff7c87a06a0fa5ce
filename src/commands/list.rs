// List command - print a collection to stdout

use anyhow::Result;
use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::cli::{Collection, ListArgs};
use crate::config::Config;
use crate::metadata::StrukturKind;
use crate::utils::{print_empty_result, OutputStyle};
use crate::Hub;

pub fn handle_list_command(config: Config, args: &ListArgs) -> Result<()> {
    let hub = Hub::open(&config)?;

    match args.collection {
        Collection::Direksi => {
            print_items("Direksi", &hub.direksi.list()?, args.json, |r| {
                format!("#{:<15} {}", r.id, r.nama)
            })?;
        }
        Collection::Divisi => {
            print_items("Divisi", &hub.divisi.list()?, args.json, |r| {
                format!("#{:<15} {}", r.id, r.nama)
            })?;
        }
        Collection::Klasifikasi => {
            print_items("Klasifikasi", &hub.klasifikasi.all()?, args.json, |i| {
                format!("#{:<15} {:?}  {}", i.id, i.tipe, i.nama)
            })?;
        }
        Collection::Checklist => {
            let tahun = args.tahun.unwrap_or_else(|| Utc::now().year());
            let items = hub.checklist.for_year(tahun)?;
            print_items(&format!("Checklist {}", tahun), &items, args.json, |i| {
                format!("#{:<15} [{}] {}", i.id, i.aspek, i.deskripsi)
            })?;
        }
        Collection::Dokumen => {
            let (title, items) = match args.tahun {
                Some(tahun) => (format!("Dokumen {}", tahun), hub.dokumen.by_year(tahun)?),
                None => ("Dokumen".to_string(), hub.dokumen.all()?),
            };
            print_items(&title, &items, args.json, |d| {
                format!("#{:<15} [{}] {} ({})", d.id, d.year, d.title, d.document_type)
            })?;
        }
        Collection::Struktur => {
            let tahun = match args.tahun {
                Some(t) => Some(t),
                None => hub.struktur.latest_year()?,
            };
            let Some(tahun) = tahun else {
                print_empty_result("struktur data");
                return Ok(());
            };

            OutputStyle::print_header(&format!("Struktur Perusahaan {}", tahun));
            for kind in [
                StrukturKind::Direktorat,
                StrukturKind::Subdirektorat,
                StrukturKind::Divisi,
            ] {
                let names = hub.struktur.names_for_year(kind, tahun)?;
                println!("{}", OutputStyle::label(kind.slot_key()));
                for nama in &names {
                    println!("  {}", nama);
                }
                if names.is_empty() {
                    println!("  {}", OutputStyle::muted("(none)"));
                }
            }
        }
    }

    Ok(())
}

fn print_items<T: Serialize>(
    title: &str,
    items: &[T],
    json: bool,
    line: impl Fn(&T) -> String,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        print_empty_result(&title.to_lowercase());
        return Ok(());
    }

    OutputStyle::print_header(title);
    for item in items {
        println!("  {}", line(item));
    }
    Ok(())
}
