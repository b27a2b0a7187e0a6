use crate::{
    CoreResult, DeviceEnumerator, LineIo, LoadOutcome, Settings, SettingsStore,
    settings::acquire_settings, validate,
};

use tracing::{debug, info, instrument, warn};

/// Produces the single guaranteed-valid settings record for this process run.
///
/// Load-and-revalidate, else interactively create-and-persist:
/// - a stored record whose level is in range and whose device id is present
///   in the live enumeration is accepted as-is;
/// - an absent blob, a malformed blob, or a stored record failing either
///   invariant all fall through to acquisition, and the fresh record is
///   persisted before it is returned.
///
/// Stale or tampered persisted data is discarded, never repaired in place,
/// and never surfaced to the operator as an error — only as a fresh prompt
/// sequence.
#[instrument(skip_all)]
pub fn resolve_settings<S, E, C>(store: &S, devices: &E, console: &mut C) -> CoreResult<Settings>
where
    S: SettingsStore,
    E: DeviceEnumerator,
    C: LineIo,
{
    match store.load() {
        LoadOutcome::Loaded(settings) => {
            let present = devices.capture_devices()?;

            if validate::level_in_range(settings.microphone_level)
                && validate::is_known_device(&settings.microphone_id, &present)
            {
                info!(
                    microphone_id = %settings.microphone_id,
                    microphone_level = settings.microphone_level,
                    "Stored settings validated"
                );
                return Ok(settings);
            }

            warn!(
                microphone_id = %settings.microphone_id,
                microphone_level = settings.microphone_level,
                "Stored settings are stale or invalid, re-acquiring"
            );
        }
        LoadOutcome::Absent => {
            debug!("No stored settings found");
        }
        LoadOutcome::Malformed => {
            warn!("Stored settings are malformed, discarding");
        }
    }

    let settings = acquire_settings(devices, console)?;
    store.save(&settings)?;

    info!("Settings persisted");

    Ok(settings)
}
