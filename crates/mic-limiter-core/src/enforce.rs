//! The ceiling enforcement loop: a fixed-period poll that only ever lowers.

use crate::{CoreResult, Settings, VolumeControl};

use std::{convert::Infallible, time::Duration};

use tracing::{debug, info, instrument};

/// Fixed poll period. External volume changes are corrected within one
/// period; there is no notification path, so up to this much drift is
/// expected.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// One clamp check: reads the current volume and writes the ceiling back iff
/// the current volume exceeds it.
///
/// Returns whether a write happened. A volume at or below the ceiling is
/// left untouched, preserving any operator-initiated decrease; equality is
/// not an excess, so the boundary produces no write and repeated ticks at or
/// below the ceiling never storm the device with writes.
pub fn clamp_once<V: VolumeControl>(settings: &Settings, control: &mut V) -> CoreResult<bool> {
    let current = control.percent()?;

    if current > settings.microphone_level {
        control.set_percent(settings.microphone_level)?;
        debug!(
            current,
            ceiling = settings.microphone_level,
            "Volume clamped to ceiling"
        );
        return Ok(true);
    }

    Ok(false)
}

/// Runs the enforcement loop until a capability call fails.
///
/// Every tick is an independent clamp check followed by a fixed sleep; there
/// is no smoothing and no hysteresis. Normal operation never returns — the
/// `Infallible` success type makes the only exit an error propagated to the
/// top-level handler.
#[instrument(skip_all, fields(ceiling = settings.microphone_level))]
pub async fn enforce_ceiling<V: VolumeControl>(
    settings: &Settings,
    control: &mut V,
) -> CoreResult<Infallible> {
    info!(
        microphone_id = %settings.microphone_id,
        ceiling = settings.microphone_level,
        "Enforcement started"
    );

    loop {
        clamp_once(settings, control)?;
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
