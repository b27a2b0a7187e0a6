//! Stubs for targets without a supported audio control surface.
//!
//! The workspace builds and runs its test suite everywhere; on these targets
//! the audio capabilities report themselves unavailable at runtime and the
//! console window toggle is a no-op.

use mic_limiter_core::{
    CaptureDevice, ConsoleWindow, CoreResult, DeviceEnumerator, LimiterError, VolumeControl,
};

use std::panic::Location;

use error_location::ErrorLocation;

#[track_caller]
fn unsupported() -> LimiterError {
    LimiterError::DeviceAccess {
        reason: "capture volume control is not supported on this platform".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// No-op stand-in for the Windows COM apartment guard.
pub(crate) struct ComSession {
    _priv: (),
}

impl ComSession {
    pub(crate) fn initialize() -> CoreResult<Self> {
        Ok(Self { _priv: () })
    }
}

/// Always-failing [`DeviceEnumerator`] stand-in.
pub(crate) struct SystemDevices {
    _priv: (),
}

impl SystemDevices {
    pub(crate) fn new() -> CoreResult<Self> {
        Ok(Self { _priv: () })
    }
}

impl DeviceEnumerator for SystemDevices {
    fn capture_devices(&self) -> CoreResult<Vec<CaptureDevice>> {
        Err(unsupported())
    }
}

/// Always-failing [`VolumeControl`] stand-in.
pub(crate) struct EndpointVolume {
    _priv: (),
}

impl EndpointVolume {
    pub(crate) fn open(_device_id: &str) -> CoreResult<Self> {
        Err(unsupported())
    }
}

impl VolumeControl for EndpointVolume {
    fn percent(&self) -> CoreResult<f32> {
        Err(unsupported())
    }

    fn set_percent(&mut self, _percent: f32) -> CoreResult<()> {
        Err(unsupported())
    }
}

/// No-op [`ConsoleWindow`] stand-in.
pub(crate) struct HostConsoleWindow {
    _priv: (),
}

impl HostConsoleWindow {
    pub(crate) fn current() -> Self {
        Self { _priv: () }
    }
}

impl ConsoleWindow for HostConsoleWindow {
    fn set_visible(&self, _visible: bool) {}
}
