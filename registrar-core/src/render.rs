//! List and table views of a collection.
//!
//! Both renderers replace the whole content of their target. Views are never
//! patched row by row, so every delete button always matches the record it
//! sits next to.

use crate::dom::{Document, Element};
use crate::record::{Record, RecordKind};

pub const EMPTY_LIST_MESSAGE: &str = "No hay registros aún. ¡Agrega el primero usando el formulario!";
pub const EMPTY_TABLE_MESSAGE: &str = "No hay registros disponibles";
pub const DELETE_LABEL: &str = "Eliminar";

/// Placeholder for empty table cells.
const EMPTY_CELL: &str = "-";

/// Render `records` as list items into the element `target_id`.
///
/// Does nothing when the page has no such element.
pub fn render_list<R: Record>(doc: &mut Document, target_id: &str, records: &[R]) {
    let Some(container) = doc.get_element_by_id_mut(target_id) else {
        return;
    };

    container.clear_children();

    if records.is_empty() {
        container.push(
            Element::new("li")
                .with_attr("class", "empty-state")
                .with_text(EMPTY_LIST_MESSAGE),
        );
        return;
    }

    for record in records {
        let mut summary = Element::new("div").with_attr("class", "record-summary");
        for node in record.summary() {
            summary.push(node);
        }

        let actions = Element::new("div")
            .with_attr("class", "record-actions")
            .with_child(delete_button(record));

        container.push(Element::new("li").with_child(summary).with_child(actions));
    }
}

/// Render `records` as rows into the `<tbody>` of the table `table_id`.
///
/// Does nothing when the page has no such table.
pub fn render_table<R: Record>(doc: &mut Document, table_id: &str, records: &[R]) {
    let Some(table) = doc.get_element_by_id_mut(table_id) else {
        return;
    };
    let Some(tbody) = table.find_mut(&|el| el.tag == "tbody") else {
        return;
    };

    tbody.clear_children();

    if records.is_empty() {
        tbody.push(
            Element::new("tr").with_child(
                Element::new("td")
                    .with_attr("class", "empty-state")
                    .with_attr("colspan", column_count(R::KIND).to_string())
                    .with_text(EMPTY_TABLE_MESSAGE),
            ),
        );
        return;
    }

    for record in records {
        let mut row = Element::new("tr");
        for cell in record.table_cells() {
            let text = if cell.is_empty() { EMPTY_CELL } else { cell };
            row.push(Element::new("td").with_text(text));
        }
        row.push(Element::new("td").with_child(delete_button(record)));
        tbody.push(row);
    }
}

/// Data columns plus the trailing action column.
pub fn column_count(kind: RecordKind) -> usize {
    kind.table_headers().len() + 1
}

fn delete_button<R: Record>(record: &R) -> Element {
    Element::new("button")
        .with_attr("type", "button")
        .with_attr("class", "action-btn delete-btn")
        .with_attr("data-kind", R::KIND.storage_key())
        .with_attr("data-uid", record.uid().to_string())
        .with_text(DELETE_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageKind, build_page};
    use crate::record::{Contact, Event, Location, RecordId};

    fn make_event(titulo: &str) -> Event {
        Event {
            uid: RecordId::new(),
            titulo: titulo.to_string(),
            fecha_hora: "2024-01-01T10:00".to_string(),
            lugar: "Room A".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_shows_summary_and_delete_button() {
        let mut doc = build_page(PageKind::Events);
        let event = make_event("Kickoff");
        render_list(&mut doc, "eventos-registrados", std::slice::from_ref(&event));

        let ul = doc.get_element_by_id("eventos-registrados").unwrap();
        let items: Vec<_> = ul.child_elements().collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].text_content().contains("Kickoff - 2024-01-01T10:00 - Room A"));

        let button = items[0].find(&|el| el.tag == "button").unwrap();
        assert_eq!(button.attr("data-uid"), Some(event.uid.to_string().as_str()));
        assert_eq!(button.attr("data-kind"), Some("eventos"));
    }

    #[test]
    fn test_list_projections_per_kind() {
        let contact = Contact {
            nombre: "Ana".to_string(),
            email: "ana@ute.edu.ec".to_string(),
            telefono: "0991234567".to_string(),
            ..Default::default()
        };
        let location = Location {
            titulo: "Campus".to_string(),
            direccion: "Av. Occidental".to_string(),
            coordenadas: "-0.17, -78.49".to_string(),
            ..Default::default()
        };

        let mut doc = build_page(PageKind::Contacts);
        render_list(&mut doc, "contactos-registrados", &[contact]);
        let text = doc.get_element_by_id("contactos-registrados").unwrap().text_content();
        assert!(text.contains("Ana - ana@ute.edu.ec - Tel: 0991234567"));

        let mut doc = build_page(PageKind::Locations);
        render_list(&mut doc, "ubicaciones-registrados", &[location]);
        let text = doc.get_element_by_id("ubicaciones-registrados").unwrap().text_content();
        assert!(text.contains("Campus - Av. Occidental - Coordenadas: -0.17, -78.49"));
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let mut doc = build_page(PageKind::Contacts);
        render_list::<Contact>(&mut doc, "contactos-registrados", &[]);

        let ul = doc.get_element_by_id("contactos-registrados").unwrap();
        let items: Vec<_> = ul.child_elements().collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text_content(), EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn test_rerender_replaces_previous_rows() {
        let mut doc = build_page(PageKind::Events);
        render_list(&mut doc, "eventos-registrados", &[make_event("a"), make_event("b")]);
        render_list(&mut doc, "eventos-registrados", &[make_event("c")]);

        let ul = doc.get_element_by_id("eventos-registrados").unwrap();
        assert_eq!(ul.child_elements().count(), 1);
        assert!(ul.text_content().starts_with('c'));
    }

    #[test]
    fn test_missing_target_is_ignored() {
        let mut doc = build_page(PageKind::Locations);
        let before = doc.clone();
        render_list(&mut doc, "eventos-registrados", &[make_event("x")]);
        render_table(&mut doc, "tabla-eventos", &[make_event("x")]);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_table_rows_fill_empty_cells() {
        let mut doc = build_page(PageKind::Data);
        render_table(&mut doc, "tabla-eventos", &[make_event("Kickoff")]);

        let table = doc.get_element_by_id("tabla-eventos").unwrap();
        let tbody = table.find(&|el| el.tag == "tbody").unwrap();
        let row = tbody.child_elements().next().unwrap();
        let cells: Vec<String> = row.child_elements().map(|td| td.text_content()).collect();
        assert_eq!(cells, vec!["Kickoff", "2024-01-01T10:00", "Room A", "-", "Eliminar"]);
    }

    #[test]
    fn test_empty_table_placeholder_spans_all_columns() {
        let mut doc = build_page(PageKind::Data);
        render_table::<Contact>(&mut doc, "tabla-contactos", &[]);

        let table = doc.get_element_by_id("tabla-contactos").unwrap();
        let td = table.find(&|el| el.tag == "td").unwrap();
        assert_eq!(td.attr("colspan"), Some("4"));
        assert_eq!(td.text_content(), EMPTY_TABLE_MESSAGE);
    }
}
