use log::{info, warn};

/// True when `running` sorts before `latest`.
///
/// This is a plain string comparison, so `"10.0"` counts as older than
/// `"9.0"`. The result only selects an advisory message.
pub fn is_stale(running: &str, latest: &str) -> bool {
    running < latest
}

/// Log the driver firmware version and an upgrade hint when it looks old.
pub fn log_firmware_advisory(running: &str, latest: &str) -> bool {
    info!("Wifi Firmware: {running}");

    let stale = is_stale(running, latest);
    if stale {
        warn!("Expected firmware version: {latest}");
        warn!("Please upgrade the firmware");
    }
    stale
}
