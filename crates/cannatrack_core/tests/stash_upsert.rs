use cannatrack_core::db::open_db_in_memory;
use cannatrack_core::{StashOutcome, StockedItem, Tracker};

#[test]
fn upsert_adds_then_merges_by_product_id() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    assert_eq!(
        tracker.upsert_stash_item(item("p1", "3.5g", Some("2026-07-01"))).unwrap(),
        StashOutcome::Added
    );
    assert_eq!(
        tracker.upsert_stash_item(item("p1", "2g", None)).unwrap(),
        StashOutcome::Updated
    );

    assert_eq!(tracker.stash_items().len(), 1);
    let stocked = &tracker.stash_items()[0];
    assert_eq!(stocked.quantity, "2g");
    assert_eq!(
        stocked.acquisition_date.as_deref(),
        Some("2026-07-01"),
        "merge keeps the existing acquisition date when none is supplied"
    );
}

#[test]
fn blank_quantity_removes_an_existing_record() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    tracker.upsert_stash_item(item("p1", "3.5g", None)).unwrap();
    assert_eq!(
        tracker.upsert_stash_item(item("p1", "  ", None)).unwrap(),
        StashOutcome::Removed
    );
    assert!(tracker.stash_items().is_empty());
}

#[test]
fn zero_quantity_on_absent_record_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    assert_eq!(
        tracker.upsert_stash_item(item("p1", "0", None)).unwrap(),
        StashOutcome::Ignored
    );
    assert!(tracker.stash_items().is_empty());
}

#[test]
fn remove_stash_item_reports_whether_anything_was_removed() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    tracker.upsert_stash_item(item("p1", "1g", None)).unwrap();
    assert!(tracker.remove_stash_item("p1").unwrap());
    assert!(!tracker.remove_stash_item("p1").unwrap());
}

#[test]
fn total_grams_sums_only_parseable_gram_quantities() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    tracker.upsert_stash_item(item("p1", "3.5g", None)).unwrap();
    tracker.upsert_stash_item(item("p2", "500mg", None)).unwrap();
    tracker.upsert_stash_item(item("p3", "1 vape cart", None)).unwrap();
    tracker.upsert_stash_item(item("p4", "50ml", None)).unwrap();

    let total = tracker.stash_total_grams();
    assert!((total - 4.0).abs() < 1e-9, "got {total}");
}

fn item(product_id: &str, quantity: &str, acquisition_date: Option<&str>) -> StockedItem {
    StockedItem {
        product_id: product_id.to_string(),
        quantity: quantity.to_string(),
        acquisition_date: acquisition_date.map(str::to_string),
    }
}
