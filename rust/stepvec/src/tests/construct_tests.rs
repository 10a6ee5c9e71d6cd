use std::collections::BTreeMap;

use crate::{ErrorKind, StepVector, StepVectorConfig};

#[test]
fn test_create() {
    assert!(StepVector::new(0, 0, 0).unwrap_err().is_zero_length());
    assert!(StepVector::new(5, 1, 0).unwrap_err().is_zero_length());

    for (start, end) in [(1, 10), (0, 10), (-1, 100), (-100, -10)] {
        let v = StepVector::new(start, end, 0).unwrap();
        v.verify();
        assert_eq!(v.start(), start);
        assert_eq!(v.end(), end);
        assert_eq!(v.bounds(), start..end);
        assert_eq!(v.len(), (end - start) as u64);
        assert_eq!(v.count(), 1);
        assert_eq!(*v.zero(), 0);
        assert!(!v.is_relaxed());
        for i in start..end {
            assert_eq!(*v.at(i).unwrap(), 0);
        }
        assert!(v.at(start - 1).unwrap_err().is_out_of_range());
        assert!(v.at(end).unwrap_err().is_out_of_range());
        assert_eq!(v.to_string(), format!("[{start}:0 {end}:<nil>]"));
    }
}

#[test]
fn test_create_without_ground_value() {
    let v = StepVector::new(-1, 100, None::<u8>).unwrap();
    v.verify();
    assert_eq!(v.at(-1).unwrap(), &None);
    assert_eq!(v.at(99).unwrap(), &None);
    assert_eq!(v.count(), 1);
}

#[test]
fn test_extreme_extent() {
    let v = StepVector::new(i64::MIN, i64::MAX, 0u8).unwrap();
    assert_eq!(v.len(), u64::MAX);
    assert_eq!(*v.at(i64::MIN).unwrap(), 0);
    assert_eq!(*v.at(i64::MAX - 1).unwrap(), 0);
    assert!(v.at(i64::MAX).unwrap_err().is_out_of_range());
}

#[test]
fn test_with_config() {
    let config = StepVectorConfig::relaxed().with_capacity(64);
    let mut v = StepVector::with_config(1, 10, 0, config.clone()).unwrap();
    assert!(v.is_relaxed());
    assert_eq!(v.config(), &config);

    v.set(12, 1).unwrap();
    assert_eq!(v.to_string(), "[1:0 12:1 13:<nil>]");

    v.set_relaxed(false);
    assert!(v.set(13, 1).unwrap_err().is_out_of_range());
    assert_eq!(v.to_string(), "[1:0 12:1 13:<nil>]");
}

#[test]
fn test_with_store() {
    let store = BTreeMap::<i64, Option<i32>>::new();
    let mut v = StepVector::with_store(store, 1, 10, 0, StepVectorConfig::default()).unwrap();
    assert_eq!(v.to_string(), "[1:0 10:<nil>]");
    v.set_range(3, 5, 2).unwrap();
    v.verify();
    assert_eq!(v.to_string(), "[1:0 3:2 5:0 10:<nil>]");
    assert_eq!(v.store().len(), 4);

    let store = BTreeMap::<i64, Option<i32>>::new();
    let err = StepVector::with_store(store, 3, 3, 0, StepVectorConfig::default()).unwrap_err();
    assert!(err.is_zero_length());
}

#[test]
fn test_with_store_rejects_populated_store() {
    let mut store = BTreeMap::new();
    store.insert(4, Some(1));
    let err = StepVector::with_store(store, 1, 10, 0, StepVectorConfig::default()).unwrap_err();
    match err.kind() {
        ErrorKind::InvalidArgument { name, .. } => assert_eq!(name, "store"),
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn test_clone_is_independent() {
    let mut a = StepVector::new(0, 10, 0).unwrap();
    a.set_range(2, 4, 1).unwrap();
    let mut b = a.clone();
    b.set_range(2, 4, 0).unwrap();
    assert_eq!(a.to_string(), "[0:0 2:1 4:0 10:<nil>]");
    assert_eq!(b.to_string(), "[0:0 10:<nil>]");
}

#[test]
fn test_debug() {
    let mut v = StepVector::new(0, 4, 0).unwrap();
    v.set(1, 5).unwrap();
    assert_eq!(
        format!("{v:?}"),
        "StepVector { zero: 0, relaxed: false, steps: [(0..1, 0), (1..2, 5), (2..4, 0)], .. }"
    );
}
