use cannatrack_core::db::open_db_in_memory;
use cannatrack_core::{slots, Theme, Tracker};
use rusqlite::Connection;

#[test]
fn first_run_yields_seed_collections() {
    let conn = open_db_in_memory().unwrap();
    let tracker = Tracker::open(&conn).unwrap();

    assert!(!tracker.products().is_empty());
    assert!(!tracker.surgeries().is_empty());
    assert!(!tracker.pharmacies().is_empty());
    assert!(tracker.entries().is_empty());
    assert!(tracker.devices().is_empty());
    assert!(tracker.stash_items().is_empty());
    assert_eq!(tracker.theme(), Theme::Light);
}

#[test]
fn catalogue_seeds_are_persisted_on_first_run() {
    let conn = open_db_in_memory().unwrap();
    let seeded_count = {
        let tracker = Tracker::open(&conn).unwrap();
        tracker.products().len()
    };

    let raw = read_slot(&conn, slots::PRODUCTS).expect("products slot should be written");
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.as_array().map(|items| items.len()), Some(seeded_count));

    // Journal-like slots stay unwritten until the first mutation.
    assert!(read_slot(&conn, slots::LOG_ENTRIES).is_none());
    assert!(read_slot(&conn, slots::DEVICES).is_none());
}

#[test]
fn corrupted_slot_data_falls_back_to_seed_without_crashing() {
    let conn = open_db_in_memory().unwrap();
    write_slot(&conn, slots::PRODUCTS, "{not json at all");
    write_slot(&conn, slots::LOG_ENTRIES, "\"a string, not an array\"");

    let tracker = Tracker::open(&conn).unwrap();

    assert!(!tracker.products().is_empty(), "seed should replace corrupt data");
    assert!(tracker.entries().is_empty());
}

#[test]
fn corrupted_slot_is_not_rewritten_until_next_mutation() {
    let conn = open_db_in_memory().unwrap();
    write_slot(&conn, slots::PRODUCTS, "{not json at all");

    let _tracker = Tracker::open(&conn).unwrap();
    assert_eq!(
        read_slot(&conn, slots::PRODUCTS).as_deref(),
        Some("{not json at all")
    );
}

#[test]
fn unknown_theme_value_falls_back_to_default() {
    let conn = open_db_in_memory().unwrap();
    write_slot(&conn, slots::THEME, "solarized");

    let tracker = Tracker::open(&conn).unwrap();
    assert_eq!(tracker.theme(), Theme::Light);
}

#[test]
fn theme_round_trips_as_plain_string() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut tracker = Tracker::open(&conn).unwrap();
        assert_eq!(tracker.toggle_theme().unwrap(), Theme::Dark);
    }

    assert_eq!(read_slot(&conn, slots::THEME).as_deref(), Some("dark"));

    let tracker = Tracker::open(&conn).unwrap();
    assert_eq!(tracker.theme(), Theme::Dark);
}

fn read_slot(conn: &Connection, slot: &str) -> Option<String> {
    conn.query_row("SELECT value FROM slots WHERE slot = ?1;", [slot], |row| {
        row.get(0)
    })
    .ok()
}

fn write_slot(conn: &Connection, slot: &str, value: &str) {
    conn.execute(
        "INSERT INTO slots (slot, value) VALUES (?1, ?2)
         ON CONFLICT(slot) DO UPDATE SET value = excluded.value;",
        [slot, value],
    )
    .unwrap();
}
