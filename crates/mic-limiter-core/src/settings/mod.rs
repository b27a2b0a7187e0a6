//! Settings model, persistence abstraction, interactive acquisition, and the
//! startup lifecycle that ties them together.

mod acquire;
mod lifecycle;
mod model;
mod store;

pub use {
    acquire::acquire_settings,
    lifecycle::resolve_settings,
    model::Settings,
    store::{LoadOutcome, SettingsStore},
};
