//! Win32 Core Audio bindings: capture-endpoint enumeration, endpoint volume
//! control, and the console window toggle.

use mic_limiter_core::{
    CaptureDevice, ConsoleWindow, CoreResult, DeviceEnumerator, LimiterError, VolumeControl,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use windows::{
    Win32::{
        Devices::FunctionDiscovery::PKEY_Device_FriendlyName,
        Media::Audio::{
            DEVICE_STATE_ACTIVE, Endpoints::IAudioEndpointVolume, IMMDevice, IMMDeviceEnumerator,
            MMDeviceEnumerator, eCapture,
        },
        System::{
            Com::{
                CLSCTX_ALL, COINIT_MULTITHREADED, CoCreateInstance, CoInitializeEx, CoTaskMemFree,
                CoUninitialize, STGM_READ,
            },
            Console::GetConsoleWindow,
        },
        UI::WindowsAndMessaging::{SW_HIDE, SW_SHOW, ShowWindow},
    },
    core::HSTRING,
};

#[track_caller]
fn access_error(context: &str, source: impl std::fmt::Display) -> LimiterError {
    LimiterError::DeviceAccess {
        reason: format!("{}: {}", context, source),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// COM apartment membership for the calling thread.
///
/// Must outlive every Core Audio interface created on the thread; the
/// composition root holds it for the whole process run.
pub(crate) struct ComSession {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl ComSession {
    /// Enters a multithreaded COM apartment for the calling thread.
    #[track_caller]
    pub(crate) fn initialize() -> CoreResult<Self> {
        // S_FALSE (already initialized) is a success; RPC_E_CHANGED_MODE is not.
        unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) }
            .ok()
            .map_err(|e| access_error("Failed to initialize COM", e))?;

        Ok(Self {
            _not_send: std::marker::PhantomData,
        })
    }
}

impl Drop for ComSession {
    fn drop(&mut self) {
        // Balances the CoInitializeEx in initialize().
        unsafe { CoUninitialize() };
    }
}

/// [`DeviceEnumerator`] over the active Core Audio capture endpoints.
pub(crate) struct SystemDevices {
    enumerator: IMMDeviceEnumerator,
}

impl SystemDevices {
    #[track_caller]
    pub(crate) fn new() -> CoreResult<Self> {
        let enumerator: IMMDeviceEnumerator =
            unsafe { CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL) }
                .map_err(|e| access_error("Failed to create device enumerator", e))?;

        Ok(Self { enumerator })
    }

    fn endpoint_id(device: &IMMDevice) -> CoreResult<String> {
        let raw = unsafe { device.GetId() }
            .map_err(|e| access_error("Failed to read endpoint id", e))?;

        // Copy out before releasing the COM allocation.
        let id = unsafe { raw.to_string() };
        unsafe { CoTaskMemFree(Some(raw.as_ptr() as *const _)) };

        id.map_err(|e| access_error("Failed to decode endpoint id", e))
    }

    fn friendly_name(device: &IMMDevice) -> String {
        // An endpoint with an unreadable name is still selectable by ordinal.
        unsafe {
            device
                .OpenPropertyStore(STGM_READ)
                .and_then(|store| store.GetValue(&PKEY_Device_FriendlyName))
                .map(|value| value.to_string())
                .unwrap_or_else(|_| String::from("Unknown capture device"))
        }
    }
}

impl DeviceEnumerator for SystemDevices {
    #[instrument(skip(self))]
    fn capture_devices(&self) -> CoreResult<Vec<CaptureDevice>> {
        let collection =
            unsafe { self.enumerator.EnumAudioEndpoints(eCapture, DEVICE_STATE_ACTIVE) }
                .map_err(|e| access_error("Failed to enumerate capture endpoints", e))?;

        let count = unsafe { collection.GetCount() }
            .map_err(|e| access_error("Failed to count capture endpoints", e))?;

        let mut devices = Vec::with_capacity(count as usize);
        for index in 0..count {
            let device = unsafe { collection.Item(index) }
                .map_err(|e| access_error("Failed to open capture endpoint", e))?;

            devices.push(CaptureDevice {
                id: Self::endpoint_id(&device)?,
                name: Self::friendly_name(&device),
            });
        }

        debug!(count = devices.len(), "Capture endpoints enumerated");

        Ok(devices)
    }
}

/// [`VolumeControl`] over `IAudioEndpointVolume` for one capture endpoint.
pub(crate) struct EndpointVolume {
    endpoint: IAudioEndpointVolume,
}

impl EndpointVolume {
    /// Resolves the endpoint by id and activates its volume interface.
    ///
    /// Fails when the device has gone away or the system denies microphone
    /// access; the failure propagates as a fatal capability error.
    #[track_caller]
    #[instrument]
    pub(crate) fn open(device_id: &str) -> CoreResult<Self> {
        let enumerator: IMMDeviceEnumerator =
            unsafe { CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL) }
                .map_err(|e| access_error("Failed to create device enumerator", e))?;

        let device = unsafe { enumerator.GetDevice(&HSTRING::from(device_id)) }
            .map_err(|e| access_error("Failed to open capture device", e))?;

        let endpoint = unsafe { device.Activate::<IAudioEndpointVolume>(CLSCTX_ALL, None) }
            .map_err(|e| access_error("Failed to activate endpoint volume control", e))?;

        info!(device_id, "Endpoint volume control acquired");

        Ok(Self { endpoint })
    }
}

impl VolumeControl for EndpointVolume {
    fn percent(&self) -> CoreResult<f32> {
        let scalar = unsafe { self.endpoint.GetMasterVolumeLevelScalar() }
            .map_err(|e| access_error("Failed to read endpoint volume", e))?;

        Ok(scalar * 100.0)
    }

    fn set_percent(&mut self, percent: f32) -> CoreResult<()> {
        unsafe {
            self.endpoint
                .SetMasterVolumeLevelScalar(percent / 100.0, std::ptr::null())
        }
        .map_err(|e| access_error("Failed to write endpoint volume", e))
    }
}

/// [`ConsoleWindow`] over the Win32 console window of this process.
pub(crate) struct HostConsoleWindow {
    _priv: (),
}

impl HostConsoleWindow {
    pub(crate) fn current() -> Self {
        Self { _priv: () }
    }
}

impl ConsoleWindow for HostConsoleWindow {
    fn set_visible(&self, visible: bool) {
        let hwnd = unsafe { GetConsoleWindow() };

        // Detached from any console (e.g. spawned without one): nothing to toggle.
        if hwnd.0.is_null() {
            return;
        }

        let command = if visible { SW_SHOW } else { SW_HIDE };
        let _ = unsafe { ShowWindow(hwnd, command) };
    }
}
