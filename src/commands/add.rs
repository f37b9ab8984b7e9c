use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use dialoguer::Input;
use owo_colors::OwoColorize;
use registrar_core::{PageController, PageKind, RecordKind, RegistrarConfig, SubmitOutcome};

use crate::commands::{notifier, open_store, write_page};

#[derive(Subcommand)]
pub enum AddRecord {
    /// Add an event
    Event {
        /// Prompted for when missing, along with every other field
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        invitees: Option<String>,
        /// Date and time, e.g. "2024-01-01T10:00"
        #[arg(long)]
        datetime: Option<String>,
        #[arg(long)]
        timezone: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        recurrence: Option<String>,
        #[arg(long)]
        reminder: Option<String>,
        #[arg(long)]
        classification: Option<String>,
        #[arg(long)]
        place: Option<String>,
    },
    /// Add a contact
    Contact {
        /// Prompted for when missing, along with every other field
        #[arg(long)]
        name: Option<String>,
        /// Identification number
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        profession: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Ten digits; spaces, dashes and parentheses are ignored
        #[arg(long)]
        phone: Option<String>,
    },
    /// Add a location
    Location {
        /// Prompted for when missing, along with every other field
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        coordinates: Option<String>,
    },
}

impl AddRecord {
    /// The form this record is entered on, and the value given for each of
    /// its fields. The first field decides whether to prompt.
    fn into_form(self) -> (RecordKind, Vec<(&'static str, Option<String>)>) {
        match self {
            AddRecord::Event {
                title,
                invitees,
                datetime,
                timezone,
                description,
                recurrence,
                reminder,
                classification,
                place,
            } => (
                RecordKind::Events,
                vec![
                    ("titulo", title),
                    ("invitados", invitees),
                    ("fecha_hora", datetime),
                    ("zona_horaria", timezone),
                    ("descripcion", description),
                    ("repeticion", recurrence),
                    ("recordatorio", reminder),
                    ("clasificacion", classification),
                    ("lugar", place),
                ],
            ),
            AddRecord::Contact {
                name,
                id,
                profession,
                email,
                phone,
            } => (
                RecordKind::Contacts,
                vec![
                    ("nombre", name),
                    ("id", id),
                    ("profesion", profession),
                    ("email", email),
                    ("telefono", phone),
                ],
            ),
            AddRecord::Location {
                title,
                address,
                coordinates,
            } => (
                RecordKind::Locations,
                vec![
                    ("titulo", title),
                    ("direccion", address),
                    ("coordenadas", coordinates),
                ],
            ),
        }
    }
}

pub fn run(record: AddRecord, html: Option<&Path>, config: &RegistrarConfig) -> Result<()> {
    let (kind, values) = record.into_form();
    let interactive = values.first().is_some_and(|(_, v)| v.is_none());

    let page = match kind {
        RecordKind::Events => PageKind::Events,
        RecordKind::Contacts => PageKind::Contacts,
        RecordKind::Locations => PageKind::Locations,
    };
    let mut controller = PageController::open(open_store(config)?, notifier(config), page)?;

    for (name, value) in values {
        let value = match value {
            Some(v) => v,
            None if interactive => prompt_field(kind, name, "")?,
            None => String::new(),
        };
        controller.form_mut().set(name, value);
    }

    let saved = loop {
        match controller.submit()? {
            SubmitOutcome::Saved(uid) => break Some(uid),
            // The form keeps what was typed, so only the failing field is asked again.
            SubmitOutcome::Rejected(e) if interactive => {
                let field = e.field();
                let previous = controller.form().get(field).to_string();
                let value = prompt_field(kind, field, &previous)?;
                controller.form_mut().set(field, value);
            }
            SubmitOutcome::Rejected(_) => break None,
        }
    };

    if let Some(out) = html {
        write_page(&mut controller, out)?;
    }

    match saved {
        Some(uid) => {
            println!("  {}", format!("id: {}", uid).dimmed());
            Ok(())
        }
        None => anyhow::bail!("Record not saved"),
    }
}

fn prompt_field(kind: RecordKind, name: &str, initial: &str) -> Result<String> {
    let label = kind
        .fields()
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.label)
        .unwrap_or(name);

    let value: String = Input::new()
        .with_prompt(format!("  {}", label))
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
