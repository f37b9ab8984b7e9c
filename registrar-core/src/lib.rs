//! Core of registrar.
//!
//! This crate holds everything the front end needs to record events,
//! contacts and locations:
//! - `record` types and the collection each one lives in
//! - `store` key-value backends and the `Collections` adapter over them
//! - `render` list and table views over the `dom` document model
//! - `controller` for form submission, deletion and clearing

pub mod collections;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod notify;
pub mod page;
pub mod record;
pub mod render;
pub mod store;
pub mod validate;

pub use collections::Collections;
pub use config::RegistrarConfig;
pub use controller::{Confirmation, DeleteOutcome, PageController, SubmitOutcome};
pub use error::{RegistrarError, RegistrarResult};
pub use notify::{NoticeBoard, Notifier, Severity};
pub use page::{FormData, PageKind};
pub use record::{Contact, Event, Location, Record, RecordId, RecordKind};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
