use core::ffi::CStr;

use esp_idf_svc::sys::{esp_get_idf_version, esp_wifi_sta_get_ap_info, wifi_ap_record_t, EspError};
use esp_idf_svc::wifi::{AuthMethod, ClientConfiguration, Configuration, EspWifi};
use heapless::String;
use wifi_core::{Bssid, ConnectionStatus, Credentials, WifiDriver, MAX_SSID_LEN};

use crate::HardwareError;

pub fn map_wifi_err(err: EspError) -> HardwareError {
    // We log the detailed error; the enum just carries a coarse category.
    log::error!("Wi-Fi error: {:?}", err);
    HardwareError::Wifi("Wi-Fi error")
}

/// Station driver over `EspWifi`.
pub struct EspWifiDriver {
    wifi: EspWifi<'static>,
    configured: bool,
    requested: bool,
}

impl EspWifiDriver {
    pub(super) fn new(wifi: EspWifi<'static>) -> Self {
        Self {
            wifi,
            configured: false,
            requested: false,
        }
    }

    /// Record of the AP we are associated with, zeroed when there is none.
    fn ap_info(&self) -> wifi_ap_record_t {
        // SAFETY: wifi_ap_record_t is a plain C struct; all-zero is valid.
        let mut info: wifi_ap_record_t = unsafe { core::mem::zeroed() };

        let err = unsafe { esp_wifi_sta_get_ap_info(&mut info) };
        if let Err(err) = EspError::convert(err) {
            log::warn!("AP info unavailable: {:?}", err);
            // SAFETY: as above.
            return unsafe { core::mem::zeroed() };
        }

        info
    }
}

fn init_wifi_personal(wifi: &mut EspWifi, ssid: &str, pass: &str) -> Result<(), HardwareError> {
    let mut h_ssid = String::<32>::new();
    h_ssid
        .push_str(ssid)
        .map_err(|_| HardwareError::Config("SSID too long"))?;

    let mut password = String::<64>::new();
    password
        .push_str(pass)
        .map_err(|_| HardwareError::Config("Password too long"))?;

    let auth_method = if pass.is_empty() {
        AuthMethod::None
    } else {
        AuthMethod::WPA2Personal
    };

    let config = ClientConfiguration {
        ssid: h_ssid,
        password,
        auth_method,
        ..Default::default()
    };

    wifi.set_configuration(&Configuration::Client(config))
        .map_err(map_wifi_err)
}

/// Copy `s` into a bounded string, dropping whatever does not fit.
fn truncated<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl WifiDriver for EspWifiDriver {
    type Error = HardwareError;

    fn status(&mut self) -> ConnectionStatus {
        match self.wifi.is_connected() {
            Ok(true) => ConnectionStatus::Connected,
            Ok(false) if self.requested => ConnectionStatus::Disconnected,
            Ok(false) => ConnectionStatus::Idle,
            Err(err) => {
                log::warn!("Wi-Fi status: {:?}", err);
                ConnectionStatus::Idle
            }
        }
    }

    fn firmware_version(&mut self) -> String<32> {
        // SAFETY: ESP-IDF returns a static NUL-terminated string.
        let version = unsafe { CStr::from_ptr(esp_get_idf_version()) };
        truncated(version.to_str().unwrap_or("unknown"))
    }

    fn begin(&mut self, credentials: &Credentials) -> Result<(), HardwareError> {
        if !self.configured {
            init_wifi_personal(&mut self.wifi, credentials.ssid(), credentials.psk())?;
            self.configured = true;
        }

        if !self.wifi.is_started().map_err(map_wifi_err)? {
            self.wifi.start().map_err(map_wifi_err)?;
        }

        self.requested = true;
        self.wifi.connect().map_err(map_wifi_err)
    }

    fn ssid(&mut self) -> String<MAX_SSID_LEN> {
        let info = self.ap_info();
        let len = info.ssid.iter().position(|&b| b == 0).unwrap_or(info.ssid.len());
        truncated(core::str::from_utf8(&info.ssid[..len]).unwrap_or(""))
    }

    fn bssid(&mut self) -> Bssid {
        // ESP-IDF stores the most significant octet first; Bssid expects
        // the opposite.
        let mut octets = self.ap_info().bssid;
        octets.reverse();
        Bssid(octets)
    }

    fn rssi(&mut self) -> i32 {
        i32::from(self.ap_info().rssi)
    }

    fn encryption_type(&mut self) -> u8 {
        self.ap_info().authmode as u8
    }
}
