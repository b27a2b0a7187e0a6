//! Host platform capabilities: COM lifetime, capture-device enumeration,
//! endpoint volume control, and console window visibility.
//!
//! Both submodules expose the same type names, so the composition root is
//! platform-agnostic. The limiter is functional on Windows, where the
//! controlled surface (a Core Audio capture endpoint) lives; other targets
//! build and run the full test suite but report the audio capabilities as
//! unavailable at runtime.

#[cfg(windows)]
mod wasapi;
#[cfg(windows)]
pub(crate) use wasapi::{ComSession, EndpointVolume, HostConsoleWindow, SystemDevices};

#[cfg(not(windows))]
mod fallback;
#[cfg(not(windows))]
pub(crate) use fallback::{ComSession, EndpointVolume, HostConsoleWindow, SystemDevices};
