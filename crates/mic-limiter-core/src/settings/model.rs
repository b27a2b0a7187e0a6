use serde::{Deserialize, Serialize};

/// The persisted limiter configuration.
///
/// Immutable once validated; the enforcement loop holds it read-only for the
/// rest of the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Stable endpoint id of the controlled capture device, as produced by
    /// device enumeration.
    pub microphone_id: String,
    /// Volume ceiling in percent, within [0.0, 100.0]. Stored exactly as the
    /// operator entered it; fractional ceilings are allowed.
    pub microphone_level: f32,
}
