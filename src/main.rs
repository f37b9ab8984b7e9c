mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use registrar_core::{PageKind, RecordKind, RegistrarConfig};
use tracing_subscriber::EnvFilter;

use crate::commands::add::AddRecord;

#[derive(Parser)]
#[command(name = "registrar")]
#[command(about = "Record events, contacts and locations and render them as pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in and submit a record form
    Add {
        /// Also write the form page, with its notices, to this file
        #[arg(long)]
        html: Option<PathBuf>,

        #[command(subcommand)]
        record: AddRecord,
    },
    /// Show the records of a collection
    List {
        kind: KindArg,

        /// Print the stored JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Delete one record by id or position
    Delete {
        kind: KindArg,

        /// Record id or position, as shown by `registrar list`
        target: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// Also write the data page, with its notices, to this file
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Delete every record in every collection
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// Also write the data page, with its notices, to this file
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Render a page to HTML
    Page {
        /// Page to render (defaults to `default_page` from the config, then `data`)
        page: Option<PageArg>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Events,
    Contacts,
    Locations,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Events => RecordKind::Events,
            KindArg::Contacts => RecordKind::Contacts,
            KindArg::Locations => RecordKind::Locations,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PageArg {
    Events,
    Contacts,
    Locations,
    Data,
}

impl From<PageArg> for PageKind {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Events => PageKind::Events,
            PageArg::Contacts => PageKind::Contacts,
            PageArg::Locations => PageKind::Locations,
            PageArg::Data => PageKind::Data,
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = RegistrarConfig::load()?;

    match cli.command {
        Commands::Add { html, record } => commands::add::run(record, html.as_deref(), &config),
        Commands::List { kind, json } => commands::list::run(kind.into(), json, &config),
        Commands::Delete {
            kind,
            target,
            force,
            html,
        } => commands::delete::run(kind.into(), &target, force, html.as_deref(), &config),
        Commands::Clear { force, html } => commands::clear::run(force, html.as_deref(), &config),
        Commands::Page { page, out } => {
            let page = page
                .map(PageKind::from)
                .or(config.default_page)
                .unwrap_or(PageKind::Data);
            commands::page::run(page, out.as_deref(), &config)
        }
    }
}

/// Log to stderr, filtered by `REGISTRAR_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env("REGISTRAR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
