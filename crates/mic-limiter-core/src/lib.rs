//! Mic-limiter Core Library
//!
//! Platform-free core of the microphone level limiter: settings validation,
//! persistence abstraction, interactive acquisition, the startup lifecycle,
//! and the ceiling enforcement loop. All OS capabilities (device
//! enumeration, the live volume handle, console window visibility, terminal
//! IO) are injected through the capability traits re-exported at the crate
//! root, so everything here runs unchanged against in-memory fakes.
//!
//! # Example
//!
//! ```no_run
//! use mic_limiter_core::{
//!     CoreResult, DeviceEnumerator, LineIo, VolumeControl, enforce, settings,
//! };
//!
//! async fn run<S, E, C, V>(
//!     store: &S,
//!     devices: &E,
//!     console: &mut C,
//!     control: &mut V,
//! ) -> CoreResult<std::convert::Infallible>
//! where
//!     S: settings::SettingsStore,
//!     E: DeviceEnumerator,
//!     C: LineIo,
//!     V: VolumeControl,
//! {
//!     let settings = settings::resolve_settings(store, devices, console)?;
//!     enforce::enforce_ceiling(&settings, control).await
//! }
//! ```

mod capability;
mod error;
pub mod enforce;
pub mod settings;
pub mod validate;

pub use {
    capability::{CaptureDevice, ConsoleWindow, DeviceEnumerator, LineIo, VolumeControl},
    error::{LimiterError, Result as CoreResult},
    settings::{LoadOutcome, Settings, SettingsStore},
};
