use anyhow::Result;
use owo_colors::OwoColorize;
use registrar_core::render::EMPTY_LIST_MESSAGE;
use registrar_core::{
    Collections, Contact, Event, Location, KeyValueStore, Record, RecordKind, RegistrarConfig,
};

use crate::commands::open_store;
use crate::render::Render;

pub fn run(kind: RecordKind, json: bool, config: &RegistrarConfig) -> Result<()> {
    let collections = listing(open_store(config)?)?;

    match kind {
        RecordKind::Events => print_records(&collections.load::<Event>(), json),
        RecordKind::Contacts => print_records(&collections.load::<Contact>(), json),
        RecordKind::Locations => print_records(&collections.load::<Location>(), json),
    }
}

/// Records stored without an id get one before anything is printed, so the
/// ids shown are the ones `delete` will find.
fn listing<S: KeyValueStore>(store: S) -> Result<Collections<S>> {
    let mut collections = Collections::new(store);
    collections.init()?;
    Ok(collections)
}

fn print_records<R: Record + Render>(records: &[R], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    println!("{}", R::KIND.listing_heading().bold());

    if records.is_empty() {
        println!("   {}", EMPTY_LIST_MESSAGE.dimmed());
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        println!("{:>3}. {}", i + 1, record.render());
        println!("     {}", record.uid().to_string().dimmed());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_core::MemoryStore;

    #[test]
    fn test_listed_ids_are_stable() {
        let mut store = MemoryStore::new();
        store
            .set_item("contactos", r#"[{"nombre":"Ana","email":"ana@ute.edu.ec"}]"#)
            .unwrap();

        let collections = listing(store).unwrap();
        let first = collections.load::<Contact>();
        assert!(!first[0].uid.is_nil());

        let again = listing(collections.store().clone()).unwrap();
        assert_eq!(again.load::<Contact>()[0].uid, first[0].uid);
    }
}
