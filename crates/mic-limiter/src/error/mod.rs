use mic_limiter_core::LimiterError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the mic-limiter binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Core limiter error from mic-limiter-core.
    #[error("Limiter error: {source} {location}")]
    Core {
        /// The underlying limiter error.
        #[source]
        source: LimiterError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration directory could not be resolved or created.
    #[error("Configuration error: {reason} {location}")]
    ConfigDir {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<LimiterError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<LimiterError> for AppError {
    #[track_caller]
    fn from(source: LimiterError) -> Self {
        AppError::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
