use crate::settings::resolve_settings;
use crate::tests::support::{FakeDevices, MemoryStore, ScriptedConsole, device};
use crate::{LimiterError, Settings, SettingsStore};

fn stored(id: &str, level: f32) -> Settings {
    Settings {
        microphone_id: id.to_string(),
        microphone_level: level,
    }
}

/// WHAT: First run acquires interactively and persists the acquired record
/// WHY: An empty store must end READY with the persisted record equal to the
/// acquired one
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_store_when_resolving_then_acquires_and_persists() {
    // Given: No blob, one device, a cooperative operator
    let store = MemoryStore::empty();
    let devices = FakeDevices::new(vec![device("id-a", "Desk Mic")]);
    let mut console = ScriptedConsole::new(&["1", "55"]);

    // When: Resolving settings
    let settings = resolve_settings(&store, &devices, &mut console).unwrap();

    // Then: READY record was saved, and the store now loads it back
    assert_eq!(settings, stored("id-a", 55.0));
    assert_eq!(store.saved.borrow().as_slice(), &[settings]);
    assert!(store.exists());
}

/// WHAT: A valid stored record is accepted without any prompting
/// WHY: Load-and-revalidate must not bother the operator when nothing changed
#[test]
#[allow(clippy::unwrap_used)]
fn given_valid_stored_settings_when_resolving_then_no_interaction() {
    // Given: A stored record whose device is still attached. The console
    // script is empty, so any read attempt would error the resolve.
    let store = MemoryStore::with(stored("id-a", 40.0));
    let devices = FakeDevices::new(vec![device("id-a", "Desk Mic")]);
    let mut console = ScriptedConsole::new(&[]);

    // When: Resolving settings
    let settings = resolve_settings(&store, &devices, &mut console).unwrap();

    // Then: The stored record came through untouched and nothing was re-saved
    assert_eq!(settings, stored("id-a", 40.0));
    assert!(store.saved.borrow().is_empty());
    assert!(console.output.is_empty());
}

/// WHAT: A stored record with a detached device id is discarded and re-acquired
/// WHY: A stale id must never reach READY; it is replaced, not repaired
#[test]
#[allow(clippy::unwrap_used)]
fn given_stale_device_id_when_resolving_then_reacquires() {
    // Given: The persisted device is gone; a different one is attached
    let store = MemoryStore::with(stored("id-gone", 40.0));
    let devices = FakeDevices::new(vec![device("id-b", "Headset Mic")]);
    let mut console = ScriptedConsole::new(&["1", "65"]);

    // When: Resolving settings
    let settings = resolve_settings(&store, &devices, &mut console).unwrap();

    // Then: The stale id never surfaces; the fresh record is persisted
    assert_eq!(settings, stored("id-b", 65.0));
    assert_eq!(store.saved.borrow().as_slice(), &[settings]);
}

/// WHAT: A stored record with an out-of-range level is discarded
/// WHY: Tampered persisted data fails invariant checks and is regenerated
#[test]
#[allow(clippy::unwrap_used)]
fn given_out_of_range_stored_level_when_resolving_then_reacquires() {
    // Given: A hand-edited blob with a 150% ceiling
    let store = MemoryStore::with(stored("id-a", 150.0));
    let devices = FakeDevices::new(vec![device("id-a", "Desk Mic")]);
    let mut console = ScriptedConsole::new(&["1", "35"]);

    // When: Resolving settings
    let settings = resolve_settings(&store, &devices, &mut console).unwrap();

    // Then: The invalid ceiling was replaced by the freshly acquired one
    assert_eq!(settings, stored("id-a", 35.0));
    assert_eq!(store.saved.borrow().len(), 1);
}

/// WHAT: A malformed blob is treated like an absent one
/// WHY: No partial recovery - regenerate silently via acquisition
#[test]
#[allow(clippy::unwrap_used)]
fn given_malformed_blob_when_resolving_then_acquires_fresh() {
    let store = MemoryStore::malformed();
    let devices = FakeDevices::new(vec![device("id-a", "Desk Mic")]);
    let mut console = ScriptedConsole::new(&["1", "80"]);

    let settings = resolve_settings(&store, &devices, &mut console).unwrap();

    assert_eq!(settings, stored("id-a", 80.0));
    assert_eq!(store.saved.borrow().len(), 1);
}

/// WHAT: An enumeration failure during revalidation is fatal
/// WHY: A transient capability failure must not silently wipe a good stored
/// config through re-acquisition
#[test]
fn given_failing_enumeration_when_revalidating_then_error_propagates() {
    // Given: A stored record, but enumeration is down
    let store = MemoryStore::with(stored("id-a", 40.0));
    let devices = FakeDevices::failing();
    let mut console = ScriptedConsole::new(&[]);

    // When: Resolving settings
    let result = resolve_settings(&store, &devices, &mut console);

    // Then: The failure propagates and the stored blob is untouched
    assert!(matches!(result, Err(LimiterError::DeviceAccess { .. })));
    assert!(store.saved.borrow().is_empty());
}
