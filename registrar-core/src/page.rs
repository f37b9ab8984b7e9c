//! Pages, their forms, and submitted form values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dom::{Document, Element};
use crate::notify::NOTICE_STYLESHEET;
use crate::record::RecordKind;

/// Which page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Events,
    Contacts,
    Locations,
    /// Read-only page with a table per collection.
    Data,
}

impl PageKind {
    /// Collection edited by this page's form, if it has one.
    pub fn record_kind(&self) -> Option<RecordKind> {
        match self {
            PageKind::Events => Some(RecordKind::Events),
            PageKind::Contacts => Some(RecordKind::Contacts),
            PageKind::Locations => Some(RecordKind::Locations),
            PageKind::Data => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageKind::Events => "Eventos",
            PageKind::Contacts => "Contactos",
            PageKind::Locations => "Ubicaciones",
            PageKind::Data => "Ver datos",
        }
    }

    /// Infer the page from the fields its document carries.
    ///
    /// Only used for documents that were not built with an explicit kind.
    pub fn detect(doc: &Document) -> Option<PageKind> {
        let has_form = doc
            .body
            .find(&|el| el.tag == "form" && el.attr("action") == Some("#"))
            .is_some();

        if has_form {
            if doc.has_label_for("titulo") && doc.has_label_for("clasificacion") {
                return Some(PageKind::Events);
            }
            if doc.has_label_for("nombre") && doc.has_label_for("profesion") {
                return Some(PageKind::Contacts);
            }
            if doc.has_label_for("titulo") && doc.has_label_for("coordenadas") {
                return Some(PageKind::Locations);
            }
        }

        RecordKind::ALL
            .iter()
            .any(|kind| doc.get_element_by_id(&kind.table_target()).is_some())
            .then_some(PageKind::Data)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PageKind::Events => "events",
            PageKind::Contacts => "contacts",
            PageKind::Locations => "locations",
            PageKind::Data => "data",
        };
        write!(f, "{}", name)
    }
}

/// Values of a form, in field order.
///
/// Fields that were never filled in read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    /// Empty values for every field of `kind`.
    pub fn for_kind(kind: RecordKind) -> Self {
        FormData {
            fields: kind
                .fields()
                .iter()
                .map(|f| (f.name.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// Builder form of [`FormData::set`].
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Blank every value, keeping the field names.
    pub fn reset(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Build the document for `page`, with empty views.
pub fn build_page(page: PageKind) -> Document {
    let mut doc = Document::new();
    doc.head.push(Element::new("title").with_text(page.title()));
    doc.head.push(Element::new("style").with_text(NOTICE_STYLESHEET));

    let mut main = Element::new("main");

    match page.record_kind() {
        Some(kind) => {
            main.push(Element::new("h2").with_text(kind.form_heading()));
            main.push(build_form(kind));
            main.push(Element::new("h2").with_text(kind.listing_heading()));
            main.push(Element::new("ul").with_attr("id", kind.list_target()));
        }
        None => {
            for kind in RecordKind::ALL {
                main.push(Element::new("h2").with_text(kind.listing_heading()));
                main.push(build_table(kind));
            }
        }
    }

    doc.body.push(main);
    doc
}

fn build_form(kind: RecordKind) -> Element {
    let mut form = Element::new("form")
        .with_attr("action", "#")
        .with_attr("method", "post")
        .with_attr("data-kind", kind.storage_key());

    for field in kind.fields() {
        form.push(
            Element::new("label")
                .with_attr("for", field.name)
                .with_text(field.label),
        );

        let input = if field.input_type == "textarea" {
            Element::new("textarea")
        } else {
            Element::new("input").with_attr("type", field.input_type)
        };
        form.push(input.with_attr("id", field.name).with_attr("name", field.name));
    }

    form.with_child(
        Element::new("button")
            .with_attr("type", "submit")
            .with_text("Guardar"),
    )
}

fn build_table(kind: RecordKind) -> Element {
    let mut header = Element::new("tr");
    for heading in kind.table_headers() {
        header.push(Element::new("th").with_text(*heading));
    }
    header.push(Element::new("th").with_text("Acciones"));

    Element::new("table")
        .with_attr("id", kind.table_target())
        .with_child(Element::new("thead").with_child(header))
        .with_child(Element::new("tbody"))
}

/// Copy `form` into the inputs of `doc`'s form, so the page shows what the
/// user has typed.
pub fn fill_form(doc: &mut Document, form: &FormData) {
    doc.body.for_each_mut(&mut |el| {
        let Some(name) = el.attr("name").map(str::to_string) else {
            return;
        };
        let value = form.get(&name).to_string();
        match el.tag.as_str() {
            "input" => el.set_attr("value", value),
            "textarea" => el.set_text(value),
            _ => {}
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pages_from_labels() {
        assert_eq!(PageKind::detect(&build_page(PageKind::Events)), Some(PageKind::Events));
        assert_eq!(PageKind::detect(&build_page(PageKind::Contacts)), Some(PageKind::Contacts));
        assert_eq!(PageKind::detect(&build_page(PageKind::Locations)), Some(PageKind::Locations));
        assert_eq!(PageKind::detect(&build_page(PageKind::Data)), Some(PageKind::Data));
        assert_eq!(PageKind::detect(&Document::new()), None);
    }

    #[test]
    fn test_events_page_carries_form_and_list() {
        let doc = build_page(PageKind::Events);
        assert!(doc.get_element_by_id("eventos-registrados").is_some());
        assert!(doc.get_element_by_id("tabla-eventos").is_none());
        for field in RecordKind::Events.fields() {
            assert!(doc.has_label_for(field.name), "missing label for {}", field.name);
            assert!(doc.get_element_by_id(field.name).is_some());
        }
    }

    #[test]
    fn test_data_page_has_a_table_per_collection() {
        let doc = build_page(PageKind::Data);
        for kind in RecordKind::ALL {
            let table = doc.get_element_by_id(&kind.table_target()).unwrap();
            assert!(table.find(&|el| el.tag == "tbody").is_some());
        }
    }

    #[test]
    fn test_form_data_reset_keeps_fields() {
        let mut form = FormData::for_kind(RecordKind::Locations).with("titulo", "Campus");
        assert_eq!(form.get("titulo"), "Campus");
        assert_eq!(form.get("unknown"), "");

        form.reset();
        assert_eq!(form.get("titulo"), "");
        assert_eq!(form.iter().count(), 3);
    }

    #[test]
    fn test_fill_form_sets_input_values() {
        let mut doc = build_page(PageKind::Events);
        let form = FormData::for_kind(RecordKind::Events)
            .with("titulo", "Kickoff")
            .with("descripcion", "Primera reunión");
        fill_form(&mut doc, &form);

        let titulo = doc.get_element_by_id("titulo").unwrap();
        assert_eq!(titulo.attr("value"), Some("Kickoff"));
        let descripcion = doc.get_element_by_id("descripcion").unwrap();
        assert_eq!(descripcion.text_content(), "Primera reunión");
    }
}
