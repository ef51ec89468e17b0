use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::{firmware, ConnectionStatus, Credentials, Result, WifiDriver, WifiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssociationState {
    #[default]
    Uninitialized,
    Associating {
        attempts: u32,
    },
    Connected,
}

/// How long to wait between connect requests and when to give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub poll_interval: Duration,
    /// `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    pub fn unbounded(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            max_attempts: None,
        }
    }

    pub fn bounded(poll_interval: Duration, max_attempts: u32) -> Self {
        Self {
            poll_interval,
            max_attempts: Some(max_attempts),
        }
    }
}

/// Joins one network. Driven one [`step`](Associator::step) at a time, or
/// to completion with [`run`](Associator::run).
#[derive(Debug)]
pub struct Associator<'a> {
    credentials: &'a Credentials,
    firmware_latest: &'a str,
    policy: RetryPolicy,
    state: AssociationState,
}

impl<'a> Associator<'a> {
    pub fn new(credentials: &'a Credentials, firmware_latest: &'a str, policy: RetryPolicy) -> Self {
        Self {
            credentials,
            firmware_latest,
            policy,
            state: AssociationState::Uninitialized,
        }
    }

    pub fn state(&self) -> AssociationState {
        self.state
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Advance the state machine by one driver poll.
    ///
    /// The first step checks for the module and reports the firmware
    /// version. Every later step issues one connect request and polls the
    /// status once. `Connected` is terminal and touches nothing.
    pub fn step<D: WifiDriver>(&mut self, driver: &mut D) -> Result<AssociationState> {
        let next = match self.state {
            AssociationState::Uninitialized => {
                let status = driver.status();
                if status == ConnectionStatus::NoModule {
                    return Err(WifiError::NoModule);
                }

                let version = driver.firmware_version();
                firmware::log_firmware_advisory(&version, self.firmware_latest);

                if status.is_connected() {
                    AssociationState::Connected
                } else {
                    AssociationState::Associating { attempts: 0 }
                }
            }
            AssociationState::Associating { attempts } => {
                if let Some(max) = self.policy.max_attempts {
                    if attempts >= max {
                        return Err(WifiError::AttemptsExhausted(attempts));
                    }
                }

                info!("Attempting to connect to WPA SSID: {}", self.credentials.ssid());
                if let Err(err) = driver.begin(self.credentials) {
                    warn!("connect request failed: {err:?}");
                }

                let attempts = attempts + 1;
                let status = driver.status();
                debug!("wifi status after attempt {attempts}: {status}");

                if status.is_connected() {
                    AssociationState::Connected
                } else {
                    AssociationState::Associating { attempts }
                }
            }
            AssociationState::Connected => AssociationState::Connected,
        };

        if next == AssociationState::Connected && self.state != next {
            info!("Connected to {}", self.credentials.ssid());
        }

        self.state = next;
        Ok(next)
    }

    /// Block until connected. With the default policy this only returns
    /// `Ok`, or `Err(NoModule)` before any connect request was made.
    pub fn run<D: WifiDriver>(&mut self, driver: &mut D) -> Result<()> {
        loop {
            match self.step(driver)? {
                AssociationState::Connected => return Ok(()),
                AssociationState::Associating { attempts } if attempts > 0 => {
                    if !self.policy.poll_interval.is_zero() {
                        thread::sleep(self.policy.poll_interval);
                    }
                }
                _ => {}
            }
        }
    }
}
