use heapless::String;

use crate::{Result, WifiError, MAX_PSK_LEN, MAX_SSID_LEN};

/// Network name and pre-shared key, fixed for the life of the process.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    ssid: String<MAX_SSID_LEN>,
    psk: String<MAX_PSK_LEN>,
}

impl Credentials {
    pub fn new(ssid: &str, psk: &str) -> Result<Self> {
        if ssid.is_empty() {
            return Err(WifiError::Config("SSID is empty"));
        }

        let mut h_ssid = String::new();
        h_ssid
            .push_str(ssid)
            .map_err(|_| WifiError::Config("SSID too long"))?;

        let mut h_psk = String::new();
        h_psk
            .push_str(psk)
            .map_err(|_| WifiError::Config("Password too long"))?;

        Ok(Self {
            ssid: h_ssid,
            psk: h_psk,
        })
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn psk(&self) -> &str {
        &self.psk
    }
}

// Keep the key out of logs.
impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("ssid", &self.ssid)
            .field("psk", &"<redacted>")
            .finish()
    }
}
