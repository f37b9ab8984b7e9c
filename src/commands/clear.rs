use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use registrar_core::controller::CLEAR_PROMPT;
use registrar_core::{DeleteOutcome, PageController, PageKind, RecordKind, RegistrarConfig};

use crate::commands::{notifier, open_store, write_page};
use crate::utils::tui::confirm;

pub fn run(force: bool, html: Option<&Path>, config: &RegistrarConfig) -> Result<()> {
    let mut controller =
        PageController::open(open_store(config)?, notifier(config), PageKind::Data)?;

    let total: usize = RecordKind::ALL
        .iter()
        .map(|kind| controller.collections().count(*kind))
        .sum();

    if total == 0 {
        println!("{}", "Nothing to clear".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} {} stored", total, if total == 1 { "record" } else { "records" }).dimmed()
    );

    let confirmation = confirm(CLEAR_PROMPT, force)?;
    if controller.clear_all(confirmation)? == DeleteOutcome::Cancelled {
        println!("{}", "Nothing deleted".dimmed());
    }
    if let Some(out) = html {
        write_page(&mut controller, out)?;
    }

    Ok(())
}
