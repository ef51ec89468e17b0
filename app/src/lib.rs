use std::thread;
use std::time::Duration;

use hardware::HardwareError;
use log::{debug, error, info};
use thiserror::Error;
use wifi_core::{Associator, Credentials, RetryPolicy, StatusReporter, WifiDriver, WifiError};

use crate::messaging::InertMqttClient;
use crate::settings::{Settings, SETTINGS};

pub mod messaging;
pub mod settings;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("hardware error: {0}")]
    Hardware(#[from] HardwareError),
    #[error("wifi error: {0}")]
    Wifi(#[from] WifiError),
}

pub fn run() -> Result<(), AppError> {
    info!("starting wifi monitor");

    let credentials = Credentials::new(SETTINGS.wifi_ssid, SETTINGS.wifi_password)?;

    let mqtt = InertMqttClient::from_settings(&SETTINGS);
    debug!("mqtt client (inactive): {mqtt:?}");

    let mut wifi = match hardware::init_wifi() {
        Ok(wifi) => wifi,
        Err(HardwareError::NoModule) => no_module(),
        Err(err) => return Err(err.into()),
    };

    match associate(&mut wifi, &credentials, &SETTINGS) {
        Ok(()) => {}
        Err(WifiError::NoModule) => no_module(),
        Err(err) => return Err(err.into()),
    }

    let reporter = StatusReporter::new();
    let interval = report_interval(&SETTINGS);

    loop {
        thread::sleep(interval);
        reporter.report(&mut wifi);
    }
}

/// Join the configured network, retrying per the configured policy.
pub fn associate<D: WifiDriver>(
    driver: &mut D,
    credentials: &Credentials,
    settings: &Settings,
) -> Result<(), WifiError> {
    Associator::new(credentials, settings.wifi_firmware_latest, retry_policy(settings)).run(driver)
}

fn retry_policy(settings: &Settings) -> RetryPolicy {
    let poll_interval = Duration::from_millis(settings.connect_poll_ms);
    match settings.connect_max_attempts {
        0 => RetryPolicy::unbounded(poll_interval),
        max => RetryPolicy::bounded(poll_interval, max),
    }
}

fn report_interval(settings: &Settings) -> Duration {
    Duration::from_millis(settings.report_interval_ms)
}

fn no_module() -> ! {
    error!("Communication with WiFi module failed!");
    halt()
}

/// Park the firmware for good. Only a reset gets out of here.
pub fn halt() -> ! {
    loop {
        thread::sleep(Duration::from_secs(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(connect_max_attempts: u32) -> Settings {
        Settings {
            wifi_ssid: "home",
            wifi_password: "secret",
            wifi_firmware_latest: "v5.3",
            connect_poll_ms: 0,
            connect_max_attempts,
            report_interval_ms: 250,
            mqtt_publish_topic: "esp32/pub",
            mqtt_subscribe_topic: "esp32/sub",
        }
    }

    #[test]
    fn zero_attempts_means_unbounded() {
        assert_eq!(retry_policy(&settings(0)).max_attempts, None);
        assert_eq!(retry_policy(&settings(7)).max_attempts, Some(7));
        assert_eq!(retry_policy(&settings(7)).poll_interval, Duration::ZERO);
    }

    #[test]
    fn report_interval_from_settings() {
        assert_eq!(report_interval(&settings(0)), Duration::from_millis(250));
    }

    #[test]
    fn defaults_are_sane() {
        let policy = retry_policy(&SETTINGS);
        assert!(SETTINGS.report_interval_ms > 0);
        assert!(Credentials::new(SETTINGS.wifi_ssid, SETTINGS.wifi_password).is_ok());
        assert!(policy.max_attempts.map_or(true, |max| max > 0));
    }

    #[cfg(not(target_os = "espidf"))]
    #[test]
    fn associates_with_simulator() {
        let settings = settings(0);
        let credentials = Credentials::new(settings.wifi_ssid, settings.wifi_password).unwrap();
        let mut wifi = hardware::SimulatedWifi::new(3);

        associate(&mut wifi, &credentials, &settings).unwrap();
        assert_eq!(wifi.status(), wifi_core::ConnectionStatus::Connected);
    }

    #[cfg(not(target_os = "espidf"))]
    #[test]
    fn bounded_attempts_surface_as_error() {
        let settings = settings(2);
        let credentials = Credentials::new("home", "secret").unwrap();
        let mut wifi = hardware::SimulatedWifi::new(10);

        let err = associate(&mut wifi, &credentials, &settings).unwrap_err();
        assert_eq!(err, WifiError::AttemptsExhausted(2));
    }

    #[cfg(not(target_os = "espidf"))]
    #[test]
    fn absent_module_is_reported_not_retried() {
        let settings = settings(0);
        let credentials = Credentials::new("home", "secret").unwrap();
        let mut wifi = hardware::SimulatedWifi::absent();

        let err = associate(&mut wifi, &credentials, &settings).unwrap_err();
        assert_eq!(err, WifiError::NoModule);
    }
}
