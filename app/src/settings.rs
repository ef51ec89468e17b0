//! Compile-time configuration loaded via `toml-cfg`.

#[toml_cfg::toml_config]
pub struct Settings {
    #[default("test-ssid")]
    pub wifi_ssid: &'static str,
    #[default("test-pass")]
    pub wifi_password: &'static str,
    #[default("v5.3")]
    pub wifi_firmware_latest: &'static str,
    #[default(1000)]
    pub connect_poll_ms: u64,
    #[default(0)]
    pub connect_max_attempts: u32,
    #[default(1000)]
    pub report_interval_ms: u64,
    #[default("esp32/pub")]
    pub mqtt_publish_topic: &'static str,
    #[default("esp32/sub")]
    pub mqtt_subscribe_topic: &'static str,
}
