use heapless::String;

use crate::{Bssid, ConnectionStatus, Credentials, MAX_SSID_LEN};

/// Primitives a WiFi station driver must provide.
///
/// Attribute queries are infallible: a driver that cannot answer returns a
/// zeroed value, which callers print as-is.
pub trait WifiDriver {
    type Error: core::fmt::Debug;

    /// Current association status. `NoModule` when the radio is missing.
    fn status(&mut self) -> ConnectionStatus;
    fn firmware_version(&mut self) -> String<32>;
    /// Issue one connect request. Completion is observed through `status`.
    fn begin(&mut self, credentials: &Credentials) -> Result<(), Self::Error>;

    fn ssid(&mut self) -> String<MAX_SSID_LEN>;
    fn bssid(&mut self) -> Bssid;
    /// Signal strength in dBm.
    fn rssi(&mut self) -> i32;
    fn encryption_type(&mut self) -> u8;
}
