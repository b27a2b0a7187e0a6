//! Pure validation of operator input and persisted settings fields.

use crate::CaptureDevice;

/// True iff `level` is a usable ceiling percentage in [0.0, 100.0].
///
/// NaN compares false on both bounds and is rejected.
pub fn level_in_range(level: f32) -> bool {
    (0.0..=100.0).contains(&level)
}

/// True iff `id` matches some entry of the enumeration. Always false for an
/// empty enumeration.
pub fn is_known_device(id: &str, devices: &[CaptureDevice]) -> bool {
    devices.iter().any(|device| device.id == id)
}

/// Parses a ceiling percentage from operator input.
///
/// Returns `None` for unparsable text and for parsed values outside
/// [0.0, 100.0]. Both failures collapse into one outcome because both get the
/// same corrective action: re-prompt. Decimal input is kept exactly as
/// entered.
pub fn parse_level(input: &str) -> Option<f32> {
    input
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|level| level_in_range(*level))
}

/// Resolves a 1-based ordinal selection to a 0-based device index.
///
/// Selection prompts start at 1; indexing starts at 0. `"0"`, non-numeric
/// input, and ordinals past the end of the list are all invalid.
pub fn resolve_device_index(input: &str, device_count: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|ordinal| ordinal.checked_sub(1))
        .filter(|index| *index < device_count)
}
