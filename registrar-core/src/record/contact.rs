use serde::{Deserialize, Serialize};

use super::{Record, RecordId, RecordKind, nullable_text};
use crate::dom::{Element, Node};
use crate::page::FormData;
use crate::validate::{ValidationError, is_valid_email, is_valid_phone};

/// A person in the address book.
///
/// `id` is whatever identification number the user typed in; it has nothing
/// to do with `uid`, which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub uid: RecordId,
    #[serde(default, deserialize_with = "nullable_text")]
    pub nombre: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub profesion: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub telefono: String,
}

impl Record for Contact {
    const KIND: RecordKind = RecordKind::Contacts;

    fn uid(&self) -> RecordId {
        self.uid
    }

    fn set_uid(&mut self, uid: RecordId) {
        self.uid = uid;
    }

    fn from_form(form: &FormData) -> Self {
        Contact {
            uid: RecordId::new(),
            nombre: form.get("nombre").to_string(),
            id: form.get("id").to_string(),
            profesion: form.get("profesion").to_string(),
            email: form.get("email").to_string(),
            telefono: form.get("telefono").to_string(),
        }
    }

    fn summary(&self) -> Vec<Node> {
        vec![
            Element::new("strong").with_text(&self.nombre).into(),
            Node::text(format!(" - {} - Tel: {}", self.email, self.telefono)),
        ]
    }

    fn table_cells(&self) -> Vec<&str> {
        vec![self.nombre.as_str(), self.email.as_str(), self.telefono.as_str()]
    }

    /// Email is checked before phone; only the first failure is reported.
    fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_phone(&self.telefono) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(())
    }
}
