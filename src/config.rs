//! Properties controlling where and how the record is stored.

/// Base address of the calibration record. Other applications sharing the
/// EEPROM keep clear of `BASE_ADDR..BASE_ADDR + RECORD_LEN`.
///
/// [`RECORD_LEN`]: crate::record::RECORD_LEN
pub const BASE_ADDR: u32 = 32;

/// Store properties supplied by the caller.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub(crate) base_address: u32,
    pub(crate) verify_writes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { base_address: BASE_ADDR, verify_writes: false }
    }
}

impl Config {
    /// Place the record at `base_address` instead of [`BASE_ADDR`].
    pub fn base_address(mut self, base_address: u32) -> Self {
        self.base_address = base_address;
        self
    }

    /// Read every write back and fail with [`Error::Verify`] on a mismatch.
    ///
    /// [`Error::Verify`]: crate::Error::Verify
    pub fn verify_writes(mut self, verify_writes: bool) -> Self {
        self.verify_writes = verify_writes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.base_address, 32);
        assert!(!config.verify_writes);
    }

    #[test]
    fn builder_overrides() {
        let config = Config::default().base_address(128).verify_writes(true);
        assert_eq!(config, Config { base_address: 128, verify_writes: true });
    }
}
