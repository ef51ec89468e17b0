use core::fmt::{self, Write};

use heapless::String;

/// Formatted length: six hex pairs and five separators.
pub const BSSID_STR_LEN: usize = 17;

/// Hardware address of the associated access point, in driver storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bssid(pub [u8; 6]);

impl Bssid {
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Render as `XX:XX:XX:XX:XX:XX`, last stored octet first.
    pub fn to_hstring(&self) -> String<BSSID_STR_LEN> {
        let mut out = String::new();
        // 17 bytes always fit
        let _ = write!(out, "{self}");
        out
    }
}

impl From<[u8; 6]> for Bssid {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The driver hands the address over least-significant octet first.
        for i in (0..self.0.len()).rev() {
            write!(f, "{:02X}", self.0[i])?;
            if i > 0 {
                f.write_char(':')?;
            }
        }
        Ok(())
    }
}
