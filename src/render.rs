//! Terminal rendering for registrar records.
//!
//! The same projections as the page list views, colored with owo_colors.

use owo_colors::OwoColorize;
use registrar_core::{Contact, Event, Location};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Dash for empty fields, so columns stay readable.
fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!(
            "{} - {} - {}",
            or_dash(&self.titulo).bold(),
            or_dash(&self.fecha_hora),
            or_dash(&self.lugar)
        );
        if !self.clasificacion.is_empty() {
            line.push_str(&format!(" {}", format!("[{}]", self.clasificacion).dimmed()));
        }
        line
    }
}

impl Render for Contact {
    fn render(&self) -> String {
        format!(
            "{} - {} - Tel: {}",
            or_dash(&self.nombre).bold(),
            or_dash(&self.email),
            or_dash(&self.telefono)
        )
    }
}

impl Render for Location {
    fn render(&self) -> String {
        format!(
            "{} - {} - Coordenadas: {}",
            or_dash(&self.titulo).bold(),
            or_dash(&self.direccion),
            or_dash(&self.coordenadas)
        )
    }
}
