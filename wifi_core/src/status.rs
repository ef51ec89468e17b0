/// Station status as reported by the WiFi driver.
///
/// Only `Connected` and `NoModule` drive control flow; the rest are
/// reported for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Idle,
    NoSsidAvailable,
    ScanCompleted,
    Connected,
    ConnectFailed,
    ConnectionLost,
    Disconnected,
    NoModule,
}

impl ConnectionStatus {
    pub fn is_connected(self) -> bool {
        self == ConnectionStatus::Connected
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionStatus::Idle => "idle",
            ConnectionStatus::NoSsidAvailable => "no ssid available",
            ConnectionStatus::ScanCompleted => "scan completed",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::ConnectFailed => "connect failed",
            ConnectionStatus::ConnectionLost => "connection lost",
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::NoModule => "no module",
        }
    }
}

impl core::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_connected_is_connected() {
        assert!(ConnectionStatus::Connected.is_connected());
        assert!(!ConnectionStatus::Idle.is_connected());
        assert!(!ConnectionStatus::ConnectionLost.is_connected());
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Idle);
        assert_eq!(ConnectionStatus::NoSsidAvailable.to_string(), "no ssid available");
    }
}
