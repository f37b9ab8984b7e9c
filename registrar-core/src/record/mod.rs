//! Record types and the collection each one lives in.
//!
//! Every record is a flat set of free-text fields. The persisted field names
//! are the form field names, so a record round-trips through its form without
//! any mapping table.

mod contact;
mod event;
mod location;

pub use contact::Contact;
pub use event::Event;
pub use location::Location;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::dom::Node;
use crate::page::FormData;
use crate::validate::ValidationError;

/// Stable identifier assigned to a record when it is created.
///
/// Records written before identifiers existed deserialize with the nil id and
/// get a real one during [`crate::Collections::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        RecordId(Uuid::new_v4())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(RecordId)
    }
}

/// The three named collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Events,
    Contacts,
    Locations,
}

/// One input of a record's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
}

const fn field(name: &'static str, label: &'static str, input_type: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        label,
        input_type,
    }
}

const EVENT_FIELDS: &[FieldSpec] = &[
    field("titulo", "Título", "text"),
    field("invitados", "Invitados", "text"),
    field("fecha_hora", "Fecha y hora", "datetime-local"),
    field("zona_horaria", "Zona horaria", "text"),
    field("descripcion", "Descripción", "textarea"),
    field("repeticion", "Repetición", "text"),
    field("recordatorio", "Recordatorio", "text"),
    field("clasificacion", "Clasificación", "text"),
    field("lugar", "Lugar", "text"),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    field("nombre", "Nombre", "text"),
    field("id", "Identificación", "text"),
    field("profesion", "Profesión", "text"),
    field("email", "Correo electrónico", "email"),
    field("telefono", "Teléfono", "tel"),
];

const LOCATION_FIELDS: &[FieldSpec] = &[
    field("titulo", "Título", "text"),
    field("direccion", "Dirección", "text"),
    field("coordenadas", "Coordenadas", "text"),
];

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Events, RecordKind::Contacts, RecordKind::Locations];

    /// Key the collection is persisted under.
    pub fn storage_key(&self) -> &'static str {
        match self {
            RecordKind::Events => "eventos",
            RecordKind::Contacts => "contactos",
            RecordKind::Locations => "ubicaciones",
        }
    }

    /// Element id of the list view for this collection.
    pub fn list_target(&self) -> String {
        format!("{}-registrados", self.storage_key())
    }

    /// Element id of the table view for this collection.
    pub fn table_target(&self) -> String {
        format!("tabla-{}", self.storage_key())
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            RecordKind::Events => EVENT_FIELDS,
            RecordKind::Contacts => CONTACT_FIELDS,
            RecordKind::Locations => LOCATION_FIELDS,
        }
    }

    /// Column headings of the table view, not counting the action column.
    pub fn table_headers(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Events => &["Título", "Fecha y hora", "Lugar", "Clasificación"],
            RecordKind::Contacts => &["Nombre", "Email", "Teléfono"],
            RecordKind::Locations => &["Título", "Dirección", "Coordenadas"],
        }
    }

    pub fn saved_message(&self) -> &'static str {
        match self {
            RecordKind::Events => "¡Evento guardado exitosamente!",
            RecordKind::Contacts => "¡Contacto guardado exitosamente!",
            RecordKind::Locations => "¡Ubicación guardada exitosamente!",
        }
    }

    /// Heading shown above the form.
    pub fn form_heading(&self) -> &'static str {
        match self {
            RecordKind::Events => "Registrar evento",
            RecordKind::Contacts => "Registrar contacto",
            RecordKind::Locations => "Registrar ubicación",
        }
    }

    /// Heading shown above the list and table views.
    pub fn listing_heading(&self) -> &'static str {
        match self {
            RecordKind::Events => "Eventos registrados",
            RecordKind::Contacts => "Contactos registrados",
            RecordKind::Locations => "Ubicaciones registradas",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}

/// A record type stored in one of the collections.
pub trait Record: Serialize + DeserializeOwned + Clone + fmt::Debug {
    const KIND: RecordKind;

    fn uid(&self) -> RecordId;

    fn set_uid(&mut self, uid: RecordId);

    /// Build a fresh record (with a new id) from submitted form values.
    fn from_form(form: &FormData) -> Self;

    /// Summary projection shown in list views.
    fn summary(&self) -> Vec<Node>;

    /// Cell values for the table view, in [`RecordKind::table_headers`] order.
    fn table_cells(&self) -> Vec<&str>;

    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Accepts `null` wherever a text field is expected.
///
/// Forms with a missing input submit `null` for it.
pub(crate) fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_targets() {
        assert_eq!(RecordKind::Events.list_target(), "eventos-registrados");
        assert_eq!(RecordKind::Contacts.table_target(), "tabla-contactos");
        assert_eq!(RecordKind::Locations.storage_key(), "ubicaciones");
    }

    #[test]
    fn test_record_id_parses_display_form() {
        let id = RecordId::new();
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<RecordId>().is_err());
    }

    #[test]
    fn test_default_record_id_is_nil() {
        assert!(RecordId::default().is_nil());
        assert!(!RecordId::new().is_nil());
    }
}
