
use expected_rail::storage::{Inline, Storage, Tracked};
use expected_rail::Flavor;
use expected_rail::types::Payload;

#[test]
fn inline_take_leaves_empty() {
    let mut storage = Inline::<i32, String>::new(Payload::Value(4), || {});
    assert_eq!(storage.take(), Payload::Value(4));
    assert_eq!(storage.get(), Payload::Empty);
}

#[test]
fn inline_set_replaces_payload() {
    let mut storage = Inline::<i32, String>::new(Payload::Empty, || {});
    storage.set(Payload::Error("e".to_string()));
    assert_eq!(storage.get(), Payload::Error(&"e".to_string()));
}

#[test]
fn inline_tracks_nothing() {
    let mut storage = Inline::<i32, String>::new(Payload::Value(4), || {});
    assert!(storage.is_checked());
    storage.lock(Flavor::Success);
    assert_eq!(storage.locked(), None);
}

#[test]
fn tracked_records_inspection() {
    let storage = Tracked::<i32, String>::new(Payload::Value(4), || {});
    assert!(!storage.is_checked());
    storage.mark_checked();
    assert!(storage.is_checked());
}

#[test]
fn tracked_lock_survives_take_and_set() {
    let mut storage = Tracked::<String, String>::new(Payload::Value("v".to_string()), || {});
    storage.lock(Flavor::Success);
    assert_eq!(storage.take(), Payload::Value("v".to_string()));
    assert_eq!(storage.locked(), Some(Flavor::Success));
    storage.set(Payload::Value("w".to_string()));
    assert_eq!(storage.locked(), Some(Flavor::Success));
}
