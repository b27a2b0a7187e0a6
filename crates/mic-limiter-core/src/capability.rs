//! Capability seams between the core logic and the host environment.
//!
//! The core never touches the OS directly. Device enumeration, the live
//! volume handle, the console window, and line-oriented terminal IO are all
//! injected at the composition root, so every piece of core logic runs
//! against in-memory fakes in tests.

use crate::CoreResult;

/// One entry from a capture-device enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDevice {
    /// Opaque stable endpoint id. Not human-readable; stable across restarts
    /// while the device stays attached.
    pub id: String,
    /// Human-readable device name, shown during interactive selection.
    pub name: String,
}

/// Enumerates the audio capture devices currently attached to the machine.
pub trait DeviceEnumerator {
    /// Lists present capture devices in host order. May be empty.
    fn capture_devices(&self) -> CoreResult<Vec<CaptureDevice>>;
}

/// Live volume handle for a single capture device.
///
/// Both calls are blocking from the core's perspective; the enforcement loop
/// does not proceed past them until they complete.
pub trait VolumeControl {
    /// Current volume as a percentage in [0.0, 100.0].
    fn percent(&self) -> CoreResult<f32>;

    /// Sets the volume to `percent`, expressed in [0.0, 100.0].
    fn set_percent(&mut self, percent: f32) -> CoreResult<()>;
}

/// Line-oriented interactive channel for prompts and responses.
pub trait LineIo {
    /// Writes one line, terminating it for the operator's display.
    fn write_line(&mut self, line: &str) -> CoreResult<()>;

    /// Reads one line, without its trailing newline. End of input is an
    /// error: a closed channel must not satisfy a re-prompt loop.
    fn read_line(&mut self) -> CoreResult<String>;
}

/// Visibility toggle for the hosting console window.
///
/// Idempotent; hidden on successful startup so the tool disappears into the
/// background, shown again on the fatal-error path so the operator can read
/// the diagnostic.
pub trait ConsoleWindow {
    /// Shows or hides the console window.
    fn set_visible(&self, visible: bool);
}
