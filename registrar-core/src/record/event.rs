use serde::{Deserialize, Serialize};

use super::{Record, RecordId, RecordKind, nullable_text};
use crate::dom::{Element, Node};
use crate::page::FormData;

/// A scheduled event. Every field is free text, including the date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub uid: RecordId,
    #[serde(default, deserialize_with = "nullable_text")]
    pub titulo: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub invitados: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub fecha_hora: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub zona_horaria: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub descripcion: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub repeticion: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub recordatorio: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub clasificacion: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub lugar: String,
}

impl Record for Event {
    const KIND: RecordKind = RecordKind::Events;

    fn uid(&self) -> RecordId {
        self.uid
    }

    fn set_uid(&mut self, uid: RecordId) {
        self.uid = uid;
    }

    fn from_form(form: &FormData) -> Self {
        Event {
            uid: RecordId::new(),
            titulo: form.get("titulo").to_string(),
            invitados: form.get("invitados").to_string(),
            fecha_hora: form.get("fecha_hora").to_string(),
            zona_horaria: form.get("zona_horaria").to_string(),
            descripcion: form.get("descripcion").to_string(),
            repeticion: form.get("repeticion").to_string(),
            recordatorio: form.get("recordatorio").to_string(),
            clasificacion: form.get("clasificacion").to_string(),
            lugar: form.get("lugar").to_string(),
        }
    }

    fn summary(&self) -> Vec<Node> {
        vec![
            Element::new("strong").with_text(&self.titulo).into(),
            Node::text(format!(" - {} - {}", self.fecha_hora, self.lugar)),
        ]
    }

    fn table_cells(&self) -> Vec<&str> {
        vec![
            self.titulo.as_str(),
            self.fecha_hora.as_str(),
            self.lugar.as_str(),
            self.clasificacion.as_str(),
        ]
    }
}
