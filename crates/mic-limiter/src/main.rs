//! Mic Limiter: pins a chosen microphone's volume at or below a configured
//! ceiling, correcting any external increase within one poll period.

mod error;
mod file_store;
mod platform;
mod stdio;

pub(crate) use error::{AppError, Result as AppResult};

use crate::{
    file_store::FileSettingsStore,
    platform::{ComSession, EndpointVolume, HostConsoleWindow, SystemDevices},
    stdio::StdLineIo,
};

use mic_limiter_core::{ConsoleWindow, LineIo, enforce, settings};

use tracing::{error, info};

/// Application entry point.
///
/// The fallible body either runs the enforcement loop forever or fails on
/// capability acquisition. On failure the console window is made visible,
/// the diagnostic is printed with the likely cause, and the process waits
/// for the operator to acknowledge before terminating.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("mic_limiter=debug,mic_limiter_core=debug")
        .init();

    if let Err(e) = run().await {
        error!(error = ?e, "Fatal error");

        HostConsoleWindow::current().set_visible(true);

        let mut console = StdLineIo::new();
        let _ = console.write_line(&format!(
            "An error occurred: this likely means the application has not been \
             granted permission to access your microphone in the system \
             privacy settings.\n{}",
            e
        ));
        // Keep the diagnostic on screen until the operator acknowledges it.
        let _ = console.read_line();

        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    // COM apartment must outlive every Core Audio interface; the current-
    // thread runtime keeps them all on this one thread.
    let _com = ComSession::initialize()?;

    let store = FileSettingsStore::open_default()?;
    let devices = SystemDevices::new()?;
    let mut console = StdLineIo::new();

    let settings = settings::resolve_settings(&store, &devices, &mut console)?;

    let mut control = EndpointVolume::open(&settings.microphone_id)?;

    // Success transition: disappear into the background. The window comes
    // back only on the fatal-error path.
    HostConsoleWindow::current().set_visible(false);
    info!("Console hidden, enforcement running");

    match enforce::enforce_ceiling(&settings, &mut control).await? {}
}
