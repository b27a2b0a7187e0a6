use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Limiter errors with source location tracking.
///
/// Every variant here is fatal once it escapes the settings lifecycle or the
/// enforcement loop: the binary's top-level handler makes the console visible,
/// prints the error, and waits for operator acknowledgment. Invalid
/// interactive input never becomes an error — it is consumed by the re-prompt
/// loops in settings acquisition.
#[derive(Error, Debug)]
pub enum LimiterError {
    /// Device enumeration returned no capture devices.
    #[error("No capture devices present {location}")]
    NoCaptureDevices {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Device enumeration or volume control handle operation failed.
    #[error("Device access error: {reason} {location}")]
    DeviceAccess {
        /// Description of the device access failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Settings could not be persisted.
    #[error("Settings storage error: {reason} {location}")]
    StorageFailed {
        /// Description of the storage failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Interactive channel read or write failed.
    #[error("Console IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

// Manual From with location tracking; #[from] does not support extra fields.
impl From<std::io::Error> for LimiterError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        LimiterError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`LimiterError`].
pub type Result<T> = std::result::Result<T, LimiterError>;
