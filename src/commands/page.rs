use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use registrar_core::{PageController, PageKind, RegistrarConfig};

use crate::commands::{notifier, open_store, write_html};

pub fn run(page: PageKind, out: Option<&Path>, config: &RegistrarConfig) -> Result<()> {
    let controller = PageController::open(open_store(config)?, notifier(config), page)?;
    let html = controller.document().to_html();

    match out {
        Some(path) => {
            write_html(&html, path)?;
            println!("{}", format!("  Wrote {} page to {}", page, path.display()).green());
        }
        None => print!("{}", html),
    }

    Ok(())
}
