use crate::LimiterError;
use crate::settings::acquire_settings;
use crate::tests::support::{FakeDevices, ScriptedConsole, device};

/// WHAT: Devices are presented with 1-based ordinals and display names
/// WHY: The operator picks by number; the opaque id never appears in prompts
#[test]
#[allow(clippy::unwrap_used)]
fn given_two_devices_when_acquiring_then_menu_lists_ordinals_and_names() {
    // Given: Two enumerated devices and a straight-through script
    let devices = FakeDevices::new(vec![
        device("id-a", "Desk Mic"),
        device("id-b", "Headset Mic"),
    ]);
    let mut console = ScriptedConsole::new(&["2", "60"]);

    // When: Acquiring settings
    let settings = acquire_settings(&devices, &mut console).unwrap();

    // Then: The menu showed both entries and the selection resolved by id
    assert!(console.output.iter().any(|line| line == "1 - Desk Mic"));
    assert!(console.output.iter().any(|line| line == "2 - Headset Mic"));
    assert_eq!(settings.microphone_id, "id-b");
    assert_eq!(settings.microphone_level, 60.0);
}

/// WHAT: Invalid selections re-prompt until a valid ordinal arrives
/// WHY: Input validation errors recover locally, never fatally
#[test]
#[allow(clippy::unwrap_used)]
fn given_invalid_selections_when_acquiring_then_reprompts_until_valid() {
    // Given: "0" (below range), "abc" (non-numeric), "3" (past the end)
    let devices = FakeDevices::new(vec![
        device("id-a", "Desk Mic"),
        device("id-b", "Headset Mic"),
    ]);
    let mut console = ScriptedConsole::new(&["0", "abc", "3", "1", "25"]);

    // When: Acquiring settings
    let settings = acquire_settings(&devices, &mut console).unwrap();

    // Then: Three error lines, then the valid pick went through
    assert_eq!(console.error_lines(), 3);
    assert_eq!(settings.microphone_id, "id-a");
}

/// WHAT: Invalid level input re-prompts until a parsable in-range value
/// WHY: Parse failure and range failure share one corrective action
#[test]
#[allow(clippy::unwrap_used)]
fn given_invalid_levels_when_acquiring_then_reprompts_until_valid() {
    // Given: Out-of-range, negative, and non-numeric level attempts
    let devices = FakeDevices::new(vec![device("id-a", "Desk Mic")]);
    let mut console = ScriptedConsole::new(&["1", "150", "-3", "abc", "72.5"]);

    // When: Acquiring settings
    let settings = acquire_settings(&devices, &mut console).unwrap();

    // Then: Three error lines and the decimal value kept exactly
    assert_eq!(console.error_lines(), 3);
    assert_eq!(settings.microphone_level, 72.5);
}

/// WHAT: An empty enumeration aborts acquisition instead of looping
/// WHY: No selection can ever satisfy the prompt; this is a capability
/// failure, not an input error
#[test]
fn given_no_devices_when_acquiring_then_fatal_error() {
    // Given: An empty device list
    let devices = FakeDevices::new(Vec::new());
    let mut console = ScriptedConsole::new(&["1", "50"]);

    // When: Acquiring settings
    let result = acquire_settings(&devices, &mut console);

    // Then: NoCaptureDevices, with no prompt issued
    assert!(matches!(result, Err(LimiterError::NoCaptureDevices { .. })));
    assert!(console.output.is_empty());
}

/// WHAT: An enumeration failure propagates out of acquisition
/// WHY: Capability failures are fatal at the top level, never re-prompted
#[test]
fn given_failing_enumeration_when_acquiring_then_error_propagates() {
    let devices = FakeDevices::failing();
    let mut console = ScriptedConsole::new(&[]);

    let result = acquire_settings(&devices, &mut console);

    assert!(matches!(result, Err(LimiterError::DeviceAccess { .. })));
}
