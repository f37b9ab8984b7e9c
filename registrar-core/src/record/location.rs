use serde::{Deserialize, Serialize};

use super::{Record, RecordId, RecordKind, nullable_text};
use crate::dom::{Element, Node};
use crate::page::FormData;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub uid: RecordId,
    #[serde(default, deserialize_with = "nullable_text")]
    pub titulo: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub direccion: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub coordenadas: String,
}

impl Record for Location {
    const KIND: RecordKind = RecordKind::Locations;

    fn uid(&self) -> RecordId {
        self.uid
    }

    fn set_uid(&mut self, uid: RecordId) {
        self.uid = uid;
    }

    fn from_form(form: &FormData) -> Self {
        Location {
            uid: RecordId::new(),
            titulo: form.get("titulo").to_string(),
            direccion: form.get("direccion").to_string(),
            coordenadas: form.get("coordenadas").to_string(),
        }
    }

    fn summary(&self) -> Vec<Node> {
        vec![
            Element::new("strong").with_text(&self.titulo).into(),
            Node::text(format!(" - {} - Coordenadas: {}", self.direccion, self.coordenadas)),
        ]
    }

    fn table_cells(&self) -> Vec<&str> {
        vec![self.titulo.as_str(), self.direccion.as_str(), self.coordenadas.as_str()]
    }
}
