#[cfg(target_os = "espidf")]
mod esp;
#[cfg(not(target_os = "espidf"))]
mod host;

#[cfg(target_os = "espidf")]
pub use esp::{init_wifi, EspWifiDriver as WifiHandle};

#[cfg(not(target_os = "espidf"))]
pub use host::{init_wifi, SimulatedWifi, SimulatedWifi as WifiHandle};
