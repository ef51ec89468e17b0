//! Platform WiFi drivers behind [`wifi_core::WifiDriver`].
//!
//! On ESP-IDF this wraps `EspWifi`; everywhere else a simulator stands in so
//! the firmware can run on a desktop.

use thiserror::Error;

mod imp;

pub use imp::{init_wifi, WifiHandle};

#[cfg(not(target_os = "espidf"))]
pub use imp::SimulatedWifi;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HardwareError {
    #[error("wifi module not found")]
    NoModule,
    #[error("wifi error: {0}")]
    Wifi(&'static str),
    #[error("invalid configuration: {0}")]
    Config(&'static str),
}
