use replica_shared::{CollectionError, DualMap, Pool};

#[test]
fn test_try_insert_duplicate_key() {
    let mut map: DualMap<&str, u8> = DualMap::new();
    map.insert("health", 0);

    assert_eq!(
        map.try_insert("health", 1),
        Err(CollectionError::KeyAlreadyMapped)
    );
    assert_eq!(map.get_forward(&"health"), Some(&0));
}

#[test]
fn test_try_insert_duplicate_value() {
    let mut map: DualMap<&str, u8> = DualMap::new();
    map.insert("health", 0);

    assert_eq!(
        map.try_insert("ammo", 0),
        Err(CollectionError::ValueAlreadyMapped)
    );
    assert_eq!(map.get_reverse(&0), Some(&"health"));
    assert_eq!(map.len(), 1);
}

#[test]
#[should_panic(expected = "already present")]
fn test_insert_duplicate_panics() {
    let mut map: DualMap<u8, u8> = DualMap::new();
    map.insert(1, 1);
    map.insert(1, 2);
}

#[test]
fn test_release_untracked_key_is_a_no_op() {
    let mut pool = Pool::new(2, || 0u32);
    let key = pool.obtain();

    assert!(pool.release(key));
    assert!(!pool.release(key));
    assert_eq!(pool.in_use_count(), 0);
}

#[test]
fn test_release_all_then_release_one() {
    let mut pool = Pool::new(1, || 0u32);
    let key = pool.obtain();
    pool.release_all();

    assert!(!pool.is_in_use(key));
    assert!(!pool.release(key));
    assert_eq!(pool.free_count(), 1);
}
