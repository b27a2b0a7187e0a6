use crate::{CoreResult, Settings};

/// Result of reading the persisted settings blob.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// No blob exists yet (first run).
    Absent,
    /// A blob exists but could not be read or deserialized into the expected
    /// shape. Treated identically to [`LoadOutcome::Absent`] by the
    /// lifecycle: discarded and regenerated, never partially recovered.
    Malformed,
    /// A well-formed record. Still subject to live-device revalidation before
    /// it is accepted.
    Loaded(Settings),
}

/// Durable storage for the single settings record.
///
/// Injected into the lifecycle so tests can substitute an in-memory blob for
/// the on-disk one.
pub trait SettingsStore {
    /// True iff a persisted blob exists.
    fn exists(&self) -> bool;

    /// Reads and deserializes the blob. Read and decode failures both
    /// collapse into [`LoadOutcome::Malformed`]; the corrective action is the
    /// same either way, so there is no error channel here.
    fn load(&self) -> LoadOutcome;

    /// Serializes and writes the record, creating the blob if absent and
    /// fully overwriting it if present. A concurrent reader must never
    /// observe a partially written blob.
    fn save(&self, settings: &Settings) -> CoreResult<()>;
}
