use cannatrack_core::db::open_db_in_memory;
use cannatrack_core::Tracker;

#[test]
fn starting_a_break_makes_it_the_active_one() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    assert!(tracker.active_break().is_none());

    let started = tracker.start_break().unwrap();
    let active = tracker.active_break().expect("break should be active");
    assert_eq!(active.id, started.id);
    assert!(active.is_active);
    assert!(active.end_date.is_none());
}

#[test]
fn starting_a_second_break_closes_the_first() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    let first = tracker.start_break().unwrap();
    let second = tracker.start_break().unwrap();

    assert_eq!(tracker.breaks().len(), 2);
    let active = tracker.active_break().unwrap();
    assert_eq!(active.id, second.id);

    let closed = tracker.breaks().iter().find(|tb| tb.id == first.id).unwrap();
    assert!(!closed.is_active);
    assert!(closed.end_date.is_some(), "closing stamps an end date");
}

#[test]
fn ending_a_break_stamps_its_end_date() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    let started = tracker.start_break().unwrap();
    assert!(tracker.end_break(&started.id).unwrap());

    assert!(tracker.active_break().is_none());
    let ended = tracker.breaks().iter().find(|tb| tb.id == started.id).unwrap();
    assert!(ended.end_date.is_some());
}

#[test]
fn ending_an_unknown_or_inactive_break_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = Tracker::open(&conn).unwrap();

    assert!(!tracker.end_break("missing").unwrap());

    let started = tracker.start_break().unwrap();
    tracker.end_break(&started.id).unwrap();
    assert!(!tracker.end_break(&started.id).unwrap());
}

#[test]
fn break_state_survives_reload() {
    let conn = open_db_in_memory().unwrap();
    let started = {
        let mut tracker = Tracker::open(&conn).unwrap();
        tracker.start_break().unwrap()
    };

    let tracker = Tracker::open(&conn).unwrap();
    let active = tracker.active_break().expect("active break should persist");
    assert_eq!(active.id, started.id);
}
