mod support;

use std::sync::Arc;

use basketry::domain::basket::Basket;
use basketry::domain::error::BasketError;
use basketry::error::Error;

use support::stores::all_stores;

#[test]
fn repeated_adds_never_duplicate() {
    for fixture in all_stores() {
        let mut basket = Basket::new(1, Arc::clone(&fixture.store), 10).unwrap();

        assert_eq!(basket.add([3, 3, 1]).unwrap(), vec![3, 1], "{}", fixture.name);
        assert_eq!(basket.add([1, 3, 2]).unwrap(), vec![2], "{}", fixture.name);
        assert_eq!(basket.contents(), vec![3, 1, 2], "{}", fixture.name);

        let reloaded = Basket::new(1, Arc::clone(&fixture.store), 10).unwrap();
        assert_eq!(reloaded.contents(), vec![3, 1, 2], "{}", fixture.name);
    }
}

#[test]
fn invalid_refs_are_dropped_silently() {
    for fixture in all_stores() {
        let mut basket = Basket::new(1, Arc::clone(&fixture.store), 10).unwrap();
        assert_eq!(basket.add([0, -4, 5]).unwrap(), vec![5], "{}", fixture.name);
        assert!(!basket.has(0));
    }
}

#[test]
fn readding_moves_item_to_the_end() {
    for fixture in all_stores() {
        let mut basket = Basket::new(1, Arc::clone(&fixture.store), 10).unwrap();
        basket.add([1, 2, 3]).unwrap();
        basket.remove([1]).unwrap();
        basket.add([1]).unwrap();

        assert_eq!(basket.contents(), vec![2, 3, 1], "{}", fixture.name);
        let reloaded = Basket::new(1, Arc::clone(&fixture.store), 10).unwrap();
        assert_eq!(reloaded.contents(), vec![2, 3, 1], "{}", fixture.name);
    }
}

#[test]
fn overflowing_add_is_truncated_to_capacity() {
    for fixture in all_stores() {
        let mut basket = Basket::new(1, Arc::clone(&fixture.store), 3).unwrap();

        assert_eq!(basket.add([1, 2, 3, 4, 5]).unwrap(), vec![1, 2, 3]);
        assert!(basket.is_full(), "{}", fixture.name);

        basket.remove([2]).unwrap();
        assert_eq!(basket.add([4, 5]).unwrap(), vec![4], "{}", fixture.name);

        let reloaded = Basket::new(1, Arc::clone(&fixture.store), 3).unwrap();
        assert_eq!(reloaded.contents(), vec![1, 3, 4], "{}", fixture.name);
    }
}

#[test]
fn removing_absent_item_is_a_noop() {
    for fixture in all_stores() {
        let recording = fixture.recording();
        let mut basket = Basket::new(1, recording.clone(), 10).unwrap();
        basket.add([1, 2]).unwrap();
        let saves = recording.saves();

        assert!(basket.remove([9]).unwrap().is_empty(), "{}", fixture.name);
        assert_eq!(recording.saves(), saves, "{}", fixture.name);

        assert_eq!(basket.remove([2, 2]).unwrap(), vec![2], "{}", fixture.name);
        assert!(basket.remove([2]).unwrap().is_empty(), "{}", fixture.name);
        assert_eq!(basket.contents(), vec![1], "{}", fixture.name);
    }
}

#[test]
fn clear_returns_snapshot_then_nothing() {
    for fixture in all_stores() {
        let mut basket = Basket::new(1, Arc::clone(&fixture.store), 10).unwrap();
        basket.add([5, 4, 6]).unwrap();

        assert_eq!(basket.clear().unwrap(), vec![5, 4, 6], "{}", fixture.name);
        assert!(basket.is_empty());
        assert!(basket.clear().unwrap().is_empty(), "{}", fixture.name);

        let reloaded = Basket::new(1, Arc::clone(&fixture.store), 10).unwrap();
        assert!(reloaded.is_empty(), "{}", fixture.name);
    }
}

#[test]
fn capacity_two_walkthrough() {
    for fixture in all_stores() {
        let mut basket = Basket::new(1, Arc::clone(&fixture.store), 2).unwrap();

        assert_eq!(basket.add([1, 2, 3]).unwrap(), vec![1, 2]);
        assert!(basket.is_full(), "{}", fixture.name);

        assert_eq!(basket.remove([2]).unwrap(), vec![2]);
        assert!(!basket.is_full(), "{}", fixture.name);

        assert_eq!(basket.add([2]).unwrap(), vec![2]);
        assert!(basket.is_full(), "{}", fixture.name);
    }
}

#[test]
fn empty_add_does_not_persist() {
    for fixture in all_stores() {
        let recording = fixture.recording();
        let mut basket = Basket::new(1, recording.clone(), 10).unwrap();

        assert!(basket.add(Vec::new()).unwrap().is_empty());
        assert!(basket.add([0]).unwrap().is_empty());
        assert_eq!(recording.saves(), 0, "{}", fixture.name);

        basket.add([1, 2]).unwrap();
        assert_eq!(recording.data_saves(), 1, "{}", fixture.name);
    }
}

#[test]
fn zero_capacity_is_rejected() {
    for fixture in all_stores() {
        let result = Basket::new(1, Arc::clone(&fixture.store), 0);
        assert!(
            matches!(result, Err(Error::Basket(BasketError::InvalidCapacity))),
            "{}",
            fixture.name
        );
    }
}
