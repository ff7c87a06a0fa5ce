use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{list, seed, serve};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "gcg-hub")]
#[command(about = "Corporate governance document hub")]
#[command(version = crate::VERSION)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "DIR", help = "Override the data directory")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the JSON-over-HTTP API server
    Serve(ServeArgs),

    /// Seed metadata slots with their default data
    Seed(SeedArgs),

    /// Print a collection to stdout
    List(ListArgs),
}

impl Commands {
    pub async fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Serve(args) => {
                serve::handle_serve_command(config, &args).await?;
            }
            Commands::Seed(args) => {
                seed::handle_seed_command(config, &args)?;
            }
            Commands::List(args) => {
                list::handle_list_command(config, &args)?;
            }
        }
        Ok(())
    }
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, help = "Bind host (overrides config)")]
    pub host: Option<String>,

    #[arg(short, long, help = "Bind port (overrides config)")]
    pub port: Option<u16>,
}

#[derive(Args)]
pub struct SeedArgs {
    #[arg(short, long, help = "Overwrite slots that already hold data")]
    pub force: bool,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(value_enum, help = "Collection to print")]
    pub collection: Collection,

    #[arg(short, long, help = "Print as JSON")]
    pub json: bool,

    #[arg(short = 'y', long, help = "Filter year-scoped collections")]
    pub tahun: Option<i32>,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum Collection {
    Direksi,
    Divisi,
    Klasifikasi,
    Checklist,
    Dokumen,
    Struktur,
}
