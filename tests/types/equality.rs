use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use expected_rail::{Expected, Flavor};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn success_equals_bare_value() {
    let ok: Expected<i32> = Expected::from_value(42);
    assert!(ok.value_eq(&42));
    assert!(!ok.value_eq(&41));
}

#[test]
fn successes_with_equal_values_are_equal() {
    let a: Expected<i32> = Expected::from_value(42);
    let b: Expected<i32> = Expected::from_value(42);
    assert_eq!(a, b);
}

#[test]
fn success_differs_from_failure() {
    let ok: Expected<i32> = Expected::from_value(42);
    let failed: Expected<i32> = Expected::from_error("42".to_string());
    assert_ne!(ok, failed);
    assert!(!failed.value_eq(&42));
}

#[test]
fn same_type_flavors_differ() {
    let ok = Expected::<String, String>::with_flavor("42".to_string(), Flavor::Success);
    let failed = Expected::<String, String>::with_flavor("42".to_string(), Flavor::Failure);
    assert_ne!(ok, failed);
    assert!(ok.value_eq(&"42".to_string()));
    assert!(!failed.value_eq(&"42".to_string()));
}

#[test]
fn value_hashes_like_bare_value() {
    let ok: Expected<u64> = Expected::from_value(9);
    assert_eq!(hash_of(&ok), hash_of(&9u64));
}

#[test]
fn hash_set_deduplicates() {
    let mut set = HashSet::new();
    set.insert(Expected::<u8, u8>::from_value(1));
    set.insert(Expected::<u8, u8>::from_value(1));
    set.insert(Expected::<u8, u8>::from_error(1));
    assert_eq!(set.len(), 2);
}
