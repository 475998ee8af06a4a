// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::adapters::memory::MemoryLedger;
use crate::config::{IdentityArity, StoreConfig};
use crate::error::StoreError;
use crate::key::KeyCodec;
use crate::ledger::LedgerBackend;
use crate::store::AssetStore;
use crate::tests::FailingLedger;
use crate::types::{Identity, PhaseReading, UsageRecord};

fn store() -> AssetStore<MemoryLedger> {
    AssetStore::new(MemoryLedger::new(), StoreConfig::default())
}

fn identity() -> Identity {
    Identity::new(["dev1", "mpan-42"]).unwrap()
}

fn readings() -> Vec<PhaseReading> {
    vec![
        PhaseReading { phase_id: 0, kwh: 1.2 },
        PhaseReading { phase_id: 1, kwh: 2.3 },
        PhaseReading { phase_id: 2, kwh: 0.9 },
    ]
}

#[test]
fn test_register_returns_zero_record() {
    let mut store = store();
    let record = store.register(&identity()).unwrap();
    assert_eq!(record, UsageRecord::zero());
    assert!(record.consumption.is_empty());
}

#[test]
fn test_register_twice_fails() {
    let mut store = store();
    store.register(&identity()).unwrap();
    match store.register(&identity()) {
        Err(StoreError::AlreadyExists) => (),
        other => panic!("expected AlreadyExists, got {:?}", other),
    }
}

#[test]
fn test_update_unregistered_fails() {
    let mut store = store();
    match store.update(&identity(), "2024-01-01T00:00:00Z", "AA:BB", "d1", &readings()) {
        Err(StoreError::NotFound) => (),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_read_unregistered_fails() {
    let store = store();
    match store.read(&identity()) {
        Err(StoreError::NotFound) => (),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_update_replaces_wholesale() {
    let mut store = store();
    let id = identity();
    store.register(&id).unwrap();

    store
        .update(&id, "2024-01-01T00:00:00Z", "AA:BB", "d1", &readings())
        .unwrap();

    let second = vec![
        PhaseReading { phase_id: 0, kwh: 4.0 },
        PhaseReading { phase_id: 1, kwh: 5.0 },
        PhaseReading { phase_id: 2, kwh: 6.0 },
    ];
    store
        .update(&id, "2024-01-02T00:00:00Z", "CC:DD", "d2", &second)
        .unwrap();

    let record = store.read(&id).unwrap();
    assert_eq!(record.observed_at, "2024-01-02T00:00:00Z");
    assert_eq!(record.mac_address, "CC:DD");
    assert_eq!(record.device_timestamp, "d2");
    // Fully overwritten, never merged or appended.
    assert_eq!(record.consumption, second);
}

#[test]
fn test_update_wrong_reading_count_fails() {
    let mut store = store();
    let id = identity();
    store.register(&id).unwrap();

    for count in [0, 1, 2, 4] {
        let partial: Vec<PhaseReading> = (0..count)
            .map(|i| PhaseReading { phase_id: i as u8, kwh: 1.0 })
            .collect();
        match store.update(&id, "t", "m", "d", &partial) {
            Err(StoreError::InvalidConsumption(_)) => (),
            other => panic!("expected InvalidConsumption for {} readings, got {:?}", count, other),
        }
    }
}

#[test]
fn test_update_non_finite_kwh_fails() {
    let mut store = store();
    let id = identity();
    store.register(&id).unwrap();

    let mut bad = readings();
    bad[1].kwh = f64::NAN;
    match store.update(&id, "t", "m", "d", &bad) {
        Err(StoreError::InvalidConsumption(_)) => (),
        other => panic!("expected InvalidConsumption, got {:?}", other),
    }
}

#[test]
fn test_rejected_update_leaves_record_untouched() {
    // A rejected update must not partially mutate the stored record.
    let mut store = store();
    let id = identity();
    store.register(&id).unwrap();
    let first = store
        .update(&id, "2024-01-01T00:00:00Z", "AA:BB", "d1", &readings())
        .unwrap();

    let partial = vec![
        PhaseReading { phase_id: 0, kwh: 9.9 },
        PhaseReading { phase_id: 1, kwh: 8.8 },
    ];
    assert!(store.update(&id, "t2", "m2", "d2", &partial).is_err());

    assert_eq!(store.read(&id).unwrap(), first);
}

#[test]
fn test_rejected_update_writes_no_version() {
    let mut store = store();
    let id = identity();
    store.register(&id).unwrap();

    let key = KeyCodec::new(store.config().namespace.clone())
        .encode(&id)
        .unwrap();
    assert_eq!(store.backend().version_count(&key), 1);

    assert!(store.update(&id, "t", "m", "d", &[]).is_err());
    assert_eq!(store.backend().version_count(&key), 1);
}

#[test]
fn test_update_on_corrupt_chain_head_fails() {
    let mut store = store();
    let id = identity();
    let key = KeyCodec::new(store.config().namespace.clone())
        .encode(&id)
        .unwrap();
    store
        .backend_mut()
        .put(&key, b"not a record".to_vec())
        .unwrap();

    match store.update(&id, "t", "m", "d", &readings()) {
        Err(StoreError::CorruptRecord(_)) => (),
        other => panic!("expected CorruptRecord, got {:?}", other),
    }
}

#[test]
fn test_backend_failure_surfaces() {
    let mut ledger = FailingLedger::wrapping(MemoryLedger::new());
    ledger.fail_get = true;
    let mut store = AssetStore::new(ledger, StoreConfig::default());

    match store.register(&identity()) {
        Err(StoreError::BackendUnavailable(_)) => (),
        other => panic!("expected BackendUnavailable, got {:?}", other),
    }
}

#[test]
fn test_put_failure_surfaces() {
    let mut ledger = FailingLedger::wrapping(MemoryLedger::new());
    ledger.fail_put = true;
    let mut store = AssetStore::new(ledger, StoreConfig::default());

    match store.register(&identity()) {
        Err(StoreError::BackendUnavailable(_)) => (),
        other => panic!("expected BackendUnavailable, got {:?}", other),
    }
}

#[test]
fn test_single_component_arity() {
    let config = StoreConfig {
        identity_arity: IdentityArity::Single,
        ..StoreConfig::default()
    };
    let mut store = AssetStore::new(MemoryLedger::new(), config);
    let id = Identity::new(["dev1"]).unwrap();

    store.register(&id).unwrap();
    store
        .update(&id, "2024-01-01T00:00:00Z", "AA:BB", "d1", &readings())
        .unwrap();
    assert_eq!(store.read(&id).unwrap().consumption, readings());
}

#[test]
fn test_identities_do_not_interact() {
    let mut store = store();
    let a = Identity::new(["dev1", "mpan-42"]).unwrap();
    let b = Identity::new(["dev2", "mpan-42"]).unwrap();

    store.register(&a).unwrap();
    store.register(&b).unwrap();
    store
        .update(&a, "2024-01-01T00:00:00Z", "AA:BB", "d1", &readings())
        .unwrap();

    assert!(store.read(&b).unwrap().consumption.is_empty());
}
