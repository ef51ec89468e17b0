use core::fmt;

use heapless::String;
use log::info;

use crate::{Bssid, WifiDriver, MAX_SSID_LEN};

/// One snapshot of the current association, read straight from the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub ssid: String<MAX_SSID_LEN>,
    pub bssid: Bssid,
    pub rssi: i32,
    pub encryption: u8,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SSID: {}", self.ssid)?;
        writeln!(f, "BSSID: {}", self.bssid)?;
        writeln!(f, "signal strength (RSSI):{}", self.rssi)?;
        write!(f, "Encryption Type:{:X}", self.encryption)
    }
}

/// Reads the association attributes on demand. Holds no state, so every
/// report reflects the driver at the moment it was taken.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusReporter;

impl StatusReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn read<D: WifiDriver>(&self, driver: &mut D) -> StatusReport {
        StatusReport {
            ssid: driver.ssid(),
            bssid: driver.bssid(),
            rssi: driver.rssi(),
            encryption: driver.encryption_type(),
        }
    }

    /// Read a fresh report and write it to the console.
    pub fn report<D: WifiDriver>(&self, driver: &mut D) -> StatusReport {
        let report = self.read(driver);

        info!("Wifi status: ");
        for line in report.to_string().lines() {
            info!("{line}");
        }

        report
    }
}
