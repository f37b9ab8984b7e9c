//! Page controller: form submission, deletion and clearing.

use std::borrow::BorrowMut;

use chrono::{DateTime, Utc};

use crate::collections::Collections;
use crate::dom::{Document, Node};
use crate::error::{RegistrarError, RegistrarResult};
use crate::notify::{NoticeBoard, Notifier, Severity};
use crate::page::{FormData, PageKind, build_page, fill_form};
use crate::record::{Contact, Event, Location, Record, RecordId, RecordKind};
use crate::render::{render_list, render_table};
use crate::store::{KeyValueStore, StoreError};
use crate::validate::ValidationError;

pub const DELETED_MESSAGE: &str = "Elemento eliminado exitosamente";
pub const CLEARED_MESSAGE: &str = "Todos los datos han sido eliminados";
pub const DELETE_PROMPT: &str = "¿Estás seguro de eliminar este elemento?";
pub const CLEAR_PROMPT: &str =
    "¿Estás seguro de eliminar TODOS los datos? Esta acción no se puede deshacer.";

/// The user's answer to a destructive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Cancelled
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(RecordId),
    /// Nothing was stored and the form still holds what was typed.
    Rejected(ValidationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Drives one page: owns its document, its form and the injected store.
pub struct PageController<S, N> {
    collections: Collections<S>,
    notifier: N,
    document: Document,
    page: PageKind,
    form: FormData,
}

impl<S: KeyValueStore, N: Notifier> PageController<S, N> {
    /// Open `page` on a freshly built document.
    pub fn open(store: S, notifier: N, page: PageKind) -> RegistrarResult<Self> {
        Self::with_document(store, notifier, build_page(page), Some(page))
    }

    /// Drive an existing document. Without an explicit `page`, the page is
    /// inferred from the document's fields.
    pub fn with_document(
        store: S,
        notifier: N,
        document: Document,
        page: Option<PageKind>,
    ) -> RegistrarResult<Self> {
        let page = match page {
            Some(page) => page,
            None => PageKind::detect(&document).ok_or(RegistrarError::UnknownPage)?,
        };

        let mut collections = Collections::new(store);
        collections.init()?;

        let form = page
            .record_kind()
            .map(FormData::for_kind)
            .unwrap_or_default();

        let mut controller = PageController {
            collections,
            notifier,
            document,
            page,
            form,
        };
        controller.render_all();
        Ok(controller)
    }

    pub fn page(&self) -> PageKind {
        self.page
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormData {
        &mut self.form
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn collections(&self) -> &Collections<S> {
        &self.collections
    }

    /// Submit the page's form.
    ///
    /// A rejected or failed submission leaves the form as it was.
    pub fn submit(&mut self) -> RegistrarResult<SubmitOutcome> {
        let outcome = match self.page {
            PageKind::Events => self.submit_as::<Event>(),
            PageKind::Contacts => self.submit_as::<Contact>(),
            PageKind::Locations => self.submit_as::<Location>(),
            PageKind::Data => Err(RegistrarError::NoForm(self.page.to_string())),
        };
        fill_form(&mut self.document, &self.form);
        outcome
    }

    fn submit_as<R: Record>(&mut self) -> RegistrarResult<SubmitOutcome> {
        let record = R::from_form(&self.form);

        if let Err(e) = record.validate() {
            self.notifier.show(&e.to_string(), Severity::Error);
            return Ok(SubmitOutcome::Rejected(e));
        }

        let uid = record.uid();
        if let Err(e) = self.collections.append(record) {
            tracing::error!(collection = R::KIND.storage_key(), error = %e, "could not save record");
            self.notifier
                .show(&format!("No se pudo guardar: {e}"), Severity::Error);
            return Err(e.into());
        }

        self.notifier.show(R::KIND.saved_message(), Severity::Success);
        self.form.reset();
        self.refresh(R::KIND);
        Ok(SubmitOutcome::Saved(uid))
    }

    /// Delete the `kind` record with `uid` once the user has confirmed.
    pub fn delete(
        &mut self,
        kind: RecordKind,
        uid: RecordId,
        confirmation: Confirmation,
    ) -> RegistrarResult<DeleteOutcome> {
        if confirmation == Confirmation::Cancelled {
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = match kind {
            RecordKind::Events => self.collections.remove::<Event>(uid).map(|r| r.is_some()),
            RecordKind::Contacts => self.collections.remove::<Contact>(uid).map(|r| r.is_some()),
            RecordKind::Locations => self.collections.remove::<Location>(uid).map(|r| r.is_some()),
        };
        self.finish_delete(kind, removed, || format!("with id {uid}"))
    }

    /// Delete the `kind` record at `index` (zero-based, in stored order) once
    /// the user has confirmed.
    pub fn delete_at(
        &mut self,
        kind: RecordKind,
        index: usize,
        confirmation: Confirmation,
    ) -> RegistrarResult<DeleteOutcome> {
        if confirmation == Confirmation::Cancelled {
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = match kind {
            RecordKind::Events => self.collections.remove_at::<Event>(index).map(|r| r.is_some()),
            RecordKind::Contacts => self.collections.remove_at::<Contact>(index).map(|r| r.is_some()),
            RecordKind::Locations => self.collections.remove_at::<Location>(index).map(|r| r.is_some()),
        };
        self.finish_delete(kind, removed, || format!("at position {}", index + 1))
    }

    fn finish_delete<F>(
        &mut self,
        kind: RecordKind,
        removed: Result<bool, StoreError>,
        target: F,
    ) -> RegistrarResult<DeleteOutcome>
    where
        F: FnOnce() -> String,
    {
        match removed {
            Ok(true) => {}
            Ok(false) => {
                return Err(RegistrarError::RecordNotFound {
                    kind,
                    target: target(),
                });
            }
            Err(e) => {
                self.notifier
                    .show(&format!("No se pudo eliminar: {e}"), Severity::Error);
                return Err(e.into());
            }
        }

        self.notifier.show(DELETED_MESSAGE, Severity::Success);
        self.refresh(kind);
        Ok(DeleteOutcome::Deleted)
    }

    /// Wipe every collection once the user has confirmed, then start over
    /// as if the page had been reloaded.
    pub fn clear_all(&mut self, confirmation: Confirmation) -> RegistrarResult<DeleteOutcome> {
        if confirmation == Confirmation::Cancelled {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.collections.clear_all()?;
        self.collections.init()?;
        self.form.reset();
        fill_form(&mut self.document, &self.form);
        self.render_all();

        self.notifier.show(CLEARED_MESSAGE, Severity::Info);
        Ok(DeleteOutcome::Deleted)
    }

    /// Redraw every view of `kind` present on the page.
    pub fn refresh(&mut self, kind: RecordKind) {
        match kind {
            RecordKind::Events => self.refresh_views::<Event>(),
            RecordKind::Contacts => self.refresh_views::<Contact>(),
            RecordKind::Locations => self.refresh_views::<Location>(),
        }
    }

    fn refresh_views<R: Record>(&mut self) {
        let records = self.collections.load::<R>();
        render_list(&mut self.document, &R::KIND.list_target(), &records);
        render_table(&mut self.document, &R::KIND.table_target(), &records);
    }

    fn render_all(&mut self) {
        for kind in RecordKind::ALL {
            self.refresh(kind);
        }
    }
}

impl<S: KeyValueStore, N: Notifier + BorrowMut<NoticeBoard>> PageController<S, N> {
    /// Replace the notice overlay in the page body with the notices still on
    /// screen at `now`, dropping the ones that have finished.
    pub fn render_notices(&mut self, now: DateTime<Utc>) {
        let board: &mut NoticeBoard = self.notifier.borrow_mut();
        board.prune(now);
        let overlay = board.elements(now);

        self.document.body.retain_children(|node| match node {
            Node::Element(el) => !el
                .attr("class")
                .is_some_and(|class| class.starts_with("custom-alert")),
            Node::Text(_) => true,
        });
        for el in overlay {
            self.document.body.push(el);
        }
    }
}
