use crate::{
    CaptureDevice, CoreResult, DeviceEnumerator, LimiterError, LineIo, Settings, validate,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Interactively acquires a fresh, already-valid settings record.
///
/// Enumerates present devices once, walks the operator through device
/// selection and ceiling entry, and composes the two answers. Invalid input
/// is consumed by unbounded re-prompt loops; only IO failures and an empty
/// enumeration escape as errors.
#[track_caller]
#[instrument(skip_all)]
pub fn acquire_settings<E, C>(devices: &E, console: &mut C) -> CoreResult<Settings>
where
    E: DeviceEnumerator,
    C: LineIo,
{
    let present = devices.capture_devices()?;

    if present.is_empty() {
        return Err(LimiterError::NoCaptureDevices {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let microphone_id = choose_device(&present, console)?;
    let microphone_level = choose_level(console)?;

    info!(
        microphone_id = %microphone_id,
        microphone_level,
        "Settings acquired"
    );

    Ok(Settings {
        microphone_id,
        microphone_level,
    })
}

/// Presents each device with a 1-based ordinal and loops until the operator
/// picks one of them. Never returns an id outside the presented list.
fn choose_device<C: LineIo>(devices: &[CaptureDevice], console: &mut C) -> CoreResult<String> {
    console.write_line("Enter the number corresponding to the microphone you wish to control:")?;
    for (index, device) in devices.iter().enumerate() {
        console.write_line(&format!("{} - {}", index + 1, device.name))?;
    }

    loop {
        let input = console.read_line()?;

        match validate::resolve_device_index(&input, devices.len()) {
            Some(index) => {
                debug!(selection = %input, index, "Microphone selected");
                return Ok(devices[index].id.clone());
            }
            None => {
                console.write_line("Error: An invalid microphone selection was supplied. Try again.")?;
            }
        }
    }
}

/// Prompts for a ceiling percentage and loops until the input parses into
/// [0.0, 100.0].
fn choose_level<C: LineIo>(console: &mut C) -> CoreResult<f32> {
    console.write_line(
        "Enter the microphone level you wish to set in %, between 0 and 100 (decimals are allowed):",
    )?;

    loop {
        let input = console.read_line()?;

        match validate::parse_level(&input) {
            Some(level) => {
                debug!(level, "Microphone level entered");
                return Ok(level);
            }
            None => {
                console.write_line("Error: An invalid microphone level was supplied. Try again.")?;
            }
        }
    }
}
