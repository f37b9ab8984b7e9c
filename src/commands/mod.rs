pub mod add;
pub mod clear;
pub mod delete;
pub mod list;
pub mod page;

use std::borrow::BorrowMut;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use registrar_core::{
    FileStore, KeyValueStore, NoticeBoard, Notifier, PageController, RegistrarConfig,
};

use crate::utils::tui::TerminalNotifier;

/// Open the record store named by the config.
pub fn open_store(config: &RegistrarConfig) -> Result<FileStore> {
    let data_path = config.data_path();
    tracing::debug!(path = %data_path.display(), "opening store");
    FileStore::open(&data_path, config.quota_bytes)
        .with_context(|| format!("Failed to open store in {}", data_path.display()))
}

/// Terminal notifier with the notice timing from the config.
pub fn notifier(config: &RegistrarConfig) -> TerminalNotifier {
    TerminalNotifier::new(config.notice_timing())
}

/// Draw the notices shown so far into the page and write it to `out`.
pub fn write_page<S, N>(controller: &mut PageController<S, N>, out: &Path) -> Result<()>
where
    S: KeyValueStore,
    N: Notifier + BorrowMut<NoticeBoard>,
{
    controller.render_notices(Utc::now());
    write_html(&controller.document().to_html(), out)?;
    println!(
        "{}",
        format!("  Wrote {} page to {}", controller.page(), out.display()).dimmed()
    );
    Ok(())
}

pub fn write_html(html: &str, out: &Path) -> Result<()> {
    std::fs::write(out, html).with_context(|| format!("Failed to write {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_core::{MemoryStore, PageKind};

    fn submit_contact(config: &RegistrarConfig) -> String {
        let mut controller =
            PageController::open(MemoryStore::new(), notifier(config), PageKind::Contacts).unwrap();
        let form = controller.form_mut();
        form.set("nombre", "Ana Torres");
        form.set("email", "ana@ute.edu.ec");
        form.set("telefono", "0991234567");
        controller.submit().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("contactos.html");
        write_page(&mut controller, &out).unwrap();
        std::fs::read_to_string(out).unwrap()
    }

    #[test]
    fn test_saved_page_carries_the_notice() {
        let html = submit_contact(&RegistrarConfig::default());
        assert!(html.contains("custom-alert alert-success"));
        assert!(html.contains("¡Contacto guardado exitosamente!"));
        assert!(html.contains("Ana Torres"));
    }

    #[test]
    fn test_saved_page_uses_configured_notice_timing() {
        let config = RegistrarConfig {
            notice_display_ms: 0,
            notice_exit_ms: 600_000,
            ..RegistrarConfig::default()
        };
        let html = submit_contact(&config);
        assert!(html.contains("custom-alert alert-success exiting"));

        let default_html = submit_contact(&RegistrarConfig::default());
        assert!(!default_html.contains("alert-success exiting"));
    }
}
