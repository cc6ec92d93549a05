use cannatrack_core::db::open_db_in_memory;
use cannatrack_core::{DeviceDraft, DeviceType, EntryDraft, LocationDraft, Tracker};

#[test]
fn deleting_a_device_clears_it_from_dependent_entries() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    let device_id = tracker
        .add_device(DeviceDraft {
            name: "Volcano".to_string(),
            kind: DeviceType::DesktopVaporizer,
            brand: None,
            purchase_date: None,
            notes: None,
        })
        .unwrap();
    let entry_id = tracker
        .add_entry(entry_with_refs(Some(device_id.clone()), None, None))
        .unwrap();

    assert!(tracker.delete_device(&device_id).unwrap());

    assert!(tracker.devices().is_empty());
    let entry = tracker.entries().iter().find(|e| e.id == entry_id).unwrap();
    assert_eq!(entry.device_id, None, "reference must be cleared");
    assert_eq!(entry.product_id, "p1", "dependent entry must survive");
}

#[test]
fn deleting_a_surgery_clears_it_from_dependent_entries() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    let surgery_id = tracker
        .add_surgery(LocationDraft {
            name: "Test Clinic".to_string(),
            address: None,
            notes: None,
        })
        .unwrap();
    tracker
        .add_entry(entry_with_refs(None, Some(surgery_id.clone()), None))
        .unwrap();

    assert!(tracker.delete_surgery(&surgery_id).unwrap());
    assert!(tracker.entries()[0].surgery_id.is_none());
}

#[test]
fn deleting_a_pharmacy_clears_it_from_dependent_entries() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    let pharmacy_id = tracker
        .add_pharmacy(LocationDraft {
            name: "Test Pharmacy".to_string(),
            address: None,
            notes: None,
        })
        .unwrap();
    tracker
        .add_entry(entry_with_refs(None, None, Some(pharmacy_id.clone())))
        .unwrap();

    assert!(tracker.delete_pharmacy(&pharmacy_id).unwrap());
    assert!(tracker.entries()[0].pharmacy_id.is_none());
}

#[test]
fn deleting_one_device_leaves_other_references_alone() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    let doomed = tracker
        .add_device(DeviceDraft {
            name: "Old Pen".to_string(),
            kind: DeviceType::OilPen,
            brand: None,
            purchase_date: None,
            notes: None,
        })
        .unwrap();
    let kept = tracker
        .add_device(DeviceDraft {
            name: "Mighty+".to_string(),
            kind: DeviceType::PortableVaporizer,
            brand: None,
            purchase_date: None,
            notes: None,
        })
        .unwrap();

    tracker
        .add_entry(entry_with_refs(Some(doomed.clone()), None, None))
        .unwrap();
    tracker
        .add_entry(entry_with_refs(Some(kept.clone()), None, None))
        .unwrap();

    tracker.delete_device(&doomed).unwrap();

    let device_refs: Vec<Option<String>> = tracker
        .entries()
        .iter()
        .map(|entry| entry.device_id.clone())
        .collect();
    assert!(device_refs.contains(&Some(kept)));
    assert_eq!(device_refs.iter().filter(|r| r.is_none()).count(), 1);
}

#[test]
fn deleting_unknown_ids_is_a_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    assert!(!tracker.delete_device("missing").unwrap());
    assert!(!tracker.delete_surgery("missing").unwrap());
    assert!(!tracker.delete_pharmacy("missing").unwrap());
}

fn entry_with_refs(
    device_id: Option<String>,
    surgery_id: Option<String>,
    pharmacy_id: Option<String>,
) -> EntryDraft {
    EntryDraft {
        product_id: "p1".to_string(),
        date: "2026-08-01".to_string(),
        rating: 3,
        notes: None,
        dosage: None,
        device_id,
        surgery_id,
        pharmacy_id,
    }
}
