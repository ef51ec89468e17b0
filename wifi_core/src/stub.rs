//! Scripted driver used by the unit tests.

use std::collections::VecDeque;

use heapless::String;

use crate::{Bssid, ConnectionStatus, Credentials, WifiDriver, MAX_SSID_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubError;

#[derive(Debug, Clone)]
pub struct Attributes {
    pub ssid: &'static str,
    pub bssid: [u8; 6],
    pub rssi: i32,
    pub encryption: u8,
}

#[derive(Debug, Default)]
pub struct ScriptedDriver {
    /// Status answers in order; the last one repeats.
    statuses: VecDeque<ConnectionStatus>,
    attributes: VecDeque<Attributes>,
    pub firmware: &'static str,
    pub fail_begin: bool,

    pub status_calls: u32,
    pub begin_calls: u32,
    pub last_ssid: Option<std::string::String>,
    pub ssid_calls: u32,
    pub bssid_calls: u32,
    pub rssi_calls: u32,
    pub encryption_calls: u32,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self {
            firmware: "v5.3",
            ..Default::default()
        }
    }

    /// `Idle` for `n - 1` polls, then `Connected`.
    pub fn connected_on_poll(n: usize) -> Self {
        let mut driver = Self::new();
        for _ in 1..n {
            driver.statuses.push_back(ConnectionStatus::Idle);
        }
        driver.statuses.push_back(ConnectionStatus::Connected);
        driver
    }

    pub fn with_status(status: ConnectionStatus) -> Self {
        let mut driver = Self::new();
        driver.statuses.push_back(status);
        driver
    }

    pub fn push_attributes(&mut self, attrs: Attributes) {
        self.attributes.push_back(attrs);
    }

    fn current_attributes(&self) -> Attributes {
        self.attributes.front().cloned().unwrap_or(Attributes {
            ssid: "",
            bssid: [0; 6],
            rssi: 0,
            encryption: 0,
        })
    }

    /// Move on to the next attribute set once all four have been read.
    fn maybe_advance(&mut self) {
        let reads = [
            self.ssid_calls,
            self.bssid_calls,
            self.rssi_calls,
            self.encryption_calls,
        ];
        if reads.iter().all(|&n| n == reads[0]) && self.attributes.len() > 1 {
            self.attributes.pop_front();
        }
    }
}

impl WifiDriver for ScriptedDriver {
    type Error = StubError;

    fn status(&mut self) -> ConnectionStatus {
        self.status_calls += 1;
        if self.statuses.len() > 1 {
            self.statuses.pop_front().unwrap_or_default()
        } else {
            self.statuses.front().copied().unwrap_or_default()
        }
    }

    fn firmware_version(&mut self) -> String<32> {
        let mut out = String::new();
        let _ = out.push_str(self.firmware);
        out
    }

    fn begin(&mut self, credentials: &Credentials) -> Result<(), StubError> {
        self.begin_calls += 1;
        self.last_ssid = Some(credentials.ssid().into());
        if self.fail_begin {
            Err(StubError)
        } else {
            Ok(())
        }
    }

    fn ssid(&mut self) -> String<MAX_SSID_LEN> {
        self.ssid_calls += 1;
        let mut out = String::new();
        let _ = out.push_str(self.current_attributes().ssid);
        self.maybe_advance();
        out
    }

    fn bssid(&mut self) -> Bssid {
        self.bssid_calls += 1;
        let out = Bssid(self.current_attributes().bssid);
        self.maybe_advance();
        out
    }

    fn rssi(&mut self) -> i32 {
        self.rssi_calls += 1;
        let out = self.current_attributes().rssi;
        self.maybe_advance();
        out
    }

    fn encryption_type(&mut self) -> u8 {
        self.encryption_calls += 1;
        let out = self.current_attributes().encryption;
        self.maybe_advance();
        out
    }
}
