use heapless::String;
use log::debug;
use wifi_core::{Bssid, ConnectionStatus, Credentials, WifiDriver, MAX_SSID_LEN};

use crate::HardwareError;

/// Encryption code reported for a WPA2-PSK network (ESP-IDF numbering).
const AUTH_WPA2_PSK: u8 = 3;
const AUTH_OPEN: u8 = 0;

const SIM_BSSID: [u8; 6] = [0x02, 0x1D, 0xB0, 0x00, 0x3C, 0x5A];
const SIM_FIRMWARE: &str = "v5.3.1-sim";

/// Host-side fake station for desktop builds and tests.
///
/// Reports `Connected` once `polls_to_connect` status polls have been made
/// after the first connect request.
#[derive(Debug)]
pub struct SimulatedWifi {
    present: bool,
    polls_to_connect: u32,
    requested: Option<(String<MAX_SSID_LEN>, bool)>,
    connected: bool,
}

pub fn init_wifi() -> Result<SimulatedWifi, HardwareError> {
    debug!("simulated Wi-Fi init");
    Ok(SimulatedWifi::new(2))
}

impl SimulatedWifi {
    pub fn new(polls_to_connect: u32) -> Self {
        Self {
            present: true,
            polls_to_connect,
            requested: None,
            connected: false,
        }
    }

    /// A radio that never answers.
    pub fn absent() -> Self {
        Self {
            present: false,
            ..Self::new(0)
        }
    }
}

impl WifiDriver for SimulatedWifi {
    type Error = HardwareError;

    fn status(&mut self) -> ConnectionStatus {
        if !self.present {
            return ConnectionStatus::NoModule;
        }
        if self.connected {
            return ConnectionStatus::Connected;
        }
        if self.requested.is_none() {
            return ConnectionStatus::Idle;
        }

        if self.polls_to_connect > 0 {
            self.polls_to_connect -= 1;
        }
        if self.polls_to_connect == 0 {
            self.connected = true;
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }

    fn firmware_version(&mut self) -> String<32> {
        let mut out = String::new();
        let _ = out.push_str(SIM_FIRMWARE);
        out
    }

    fn begin(&mut self, credentials: &Credentials) -> Result<(), HardwareError> {
        if !self.present {
            return Err(HardwareError::NoModule);
        }

        debug!("simulated connect request: ssid='{}'", credentials.ssid());

        let mut ssid = String::new();
        ssid.push_str(credentials.ssid())
            .map_err(|_| HardwareError::Config("SSID too long"))?;
        self.requested = Some((ssid, !credentials.psk().is_empty()));
        Ok(())
    }

    fn ssid(&mut self) -> String<MAX_SSID_LEN> {
        match &self.requested {
            Some((ssid, _)) if self.connected => ssid.clone(),
            _ => String::new(),
        }
    }

    fn bssid(&mut self) -> Bssid {
        if self.connected {
            Bssid(SIM_BSSID)
        } else {
            Bssid::default()
        }
    }

    fn rssi(&mut self) -> i32 {
        if self.connected {
            rand::random_range(-75..=-40)
        } else {
            0
        }
    }

    fn encryption_type(&mut self) -> u8 {
        match self.requested {
            Some((_, true)) if self.connected => AUTH_WPA2_PSK,
            _ => AUTH_OPEN,
        }
    }
}
