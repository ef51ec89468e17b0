use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::EspWifi;

use crate::HardwareError;

mod wifi;

pub use wifi::EspWifiDriver;

use wifi::map_wifi_err;

/// Take the modem and bring up the station driver.
///
/// A failure to create `EspWifi` means the radio is unusable and is
/// reported as [`HardwareError::NoModule`].
pub fn init_wifi() -> Result<EspWifiDriver, HardwareError> {
    let peripherals = Peripherals::take().map_err(map_wifi_err)?;
    let sysloop = EspSystemEventLoop::take().map_err(map_wifi_err)?;
    let nvs = EspDefaultNvsPartition::take().map_err(map_wifi_err)?;

    let wifi = EspWifi::new(peripherals.modem, sysloop, Some(nvs)).map_err(|err| {
        log::error!("EspWifi init: {:?}", err);
        HardwareError::NoModule
    })?;

    Ok(EspWifiDriver::new(wifi))
}
