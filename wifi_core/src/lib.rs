//! Association and status-reporting logic for a single WiFi station.
//!
//! Everything in here is driver-agnostic: the platform supplies a
//! [`WifiDriver`] and this crate decides when to call it.

use thiserror::Error;

pub mod associator;
pub mod bssid;
pub mod credentials;
pub mod driver;
pub mod firmware;
pub mod reporter;
pub mod status;

#[cfg(test)]
pub(crate) mod stub;

pub use associator::{AssociationState, Associator, RetryPolicy};
pub use bssid::Bssid;
pub use credentials::Credentials;
pub use driver::WifiDriver;
pub use reporter::{StatusReport, StatusReporter};
pub use status::ConnectionStatus;

/// Longest SSID accepted by 802.11.
pub const MAX_SSID_LEN: usize = 32;
/// Longest WPA/WPA2 pre-shared key.
pub const MAX_PSK_LEN: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WifiError {
    #[error("communication with wifi module failed")]
    NoModule,
    #[error("not connected after {0} attempts")]
    AttemptsExhausted(u32),
    #[error("invalid configuration: {0}")]
    Config(&'static str),
}

pub type Result<T> = std::result::Result<T, WifiError>;
