#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod fmt;

pub mod config;
pub mod device;
pub mod record;
pub mod store;

pub use config::{Config, BASE_ADDR};
pub use record::{CalibrationRecord, FORMAT_VERSION, RECORD_LEN};
pub use store::CalibrationStore;

/// Address of the calibration record in EEPROM.
pub const fn config_addr() -> u32 {
    BASE_ADDR
}

/// Failure of a store operation. A record with a stale version tag is not an
/// error; loads report it as absent.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The caller-supplied storage failed to read or write.
    Storage(E),
    /// The record does not fit between the address and the end of storage.
    OutOfBounds,
    /// Bytes read back after a write differ from the bytes written.
    Verify,
}
