//! Calibration record and its on-device byte layout.
//!
//! The record is stored as five bytes with no padding:
//!
//! | offset | field            | width                  |
//! |--------|------------------|------------------------|
//! | 0      | `frequency`      | 4 bytes, little-endian |
//! | 4      | `struct_version` | 1 byte                 |
//!
//! This is also the in-memory layout of the packed `u32` + `u8` struct on
//! 8-bit AVR parts, so records written there byte-for-byte decode unchanged.

/// Format version stamped into every saved record. Records carrying any other
/// version are rejected on load.
pub const FORMAT_VERSION: u8 = 2;

/// Number of bytes a record occupies in storage.
pub const RECORD_LEN: usize = FREQUENCY_LEN + 1;

const FREQUENCY_LEN: usize = ::core::mem::size_of::<u32>();

/// Reasons a byte buffer does not decode to a valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The buffer is not exactly [`RECORD_LEN`] bytes.
    Length(usize),
    /// The stored version tag differs from [`FORMAT_VERSION`].
    Version(u8),
}

/// Calibration frequency together with the format version it was stored under.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationRecord {
    /// Calibration frequency in Hz.
    pub frequency: u32,
    /// Format version tag. Overwritten with [`FORMAT_VERSION`] on save.
    pub struct_version: u8,
}

impl CalibrationRecord {
    /// Creation, stamped with the current format version.
    pub fn new(frequency: u32) -> Self {
        Self { frequency, struct_version: FORMAT_VERSION }
    }

    /// Does the version tag match the current format?
    pub fn is_current(&self) -> bool {
        self.struct_version == FORMAT_VERSION
    }

    /// Serialize in the current layout. The version byte is always
    /// [`FORMAT_VERSION`], whatever `struct_version` holds.
    pub fn encode(&self) -> [u8; RECORD_LEN] {
        let mut buf = [0; RECORD_LEN];
        buf[..FREQUENCY_LEN].copy_from_slice(&self.frequency.to_le_bytes());
        buf[FREQUENCY_LEN] = FORMAT_VERSION;
        buf
    }

    /// Deserialize without checking the version tag.
    pub fn decode_raw(bytes: &[u8; RECORD_LEN]) -> Self {
        let mut frequency = [0; FREQUENCY_LEN];
        frequency.copy_from_slice(&bytes[..FREQUENCY_LEN]);
        Self { frequency: u32::from_le_bytes(frequency), struct_version: bytes[FREQUENCY_LEN] }
    }
}

impl TryFrom<&[u8]> for CalibrationRecord {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: &[u8; RECORD_LEN] =
            bytes.try_into().map_err(|_| Error::Length(bytes.len()))?;
        let record = Self::decode_raw(bytes);
        if record.is_current() {
            Ok(record)
        } else {
            Err(Error::Version(record.struct_version))
        }
    }
}

impl From<&CalibrationRecord> for [u8; RECORD_LEN] {
    fn from(record: &CalibrationRecord) -> Self {
        record.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_little_endian_frequency_then_version() {
        let record = CalibrationRecord::new(14_250_000);
        assert_eq!(record.encode(), [0x10, 0x70, 0xd9, 0x00, FORMAT_VERSION]);
    }

    #[test]
    fn encode_stamps_current_version() {
        let record = CalibrationRecord { frequency: 1, struct_version: 0 };
        assert_eq!(record.encode()[4], FORMAT_VERSION);
    }

    #[test]
    fn older_version_is_rejected() {
        let bytes = [0x10, 0x27, 0x00, 0x00, 1];
        assert_eq!(CalibrationRecord::try_from(&bytes[..]), Err(Error::Version(1)));
    }

    #[test]
    fn erased_bytes_are_rejected() {
        let bytes = [0xff; RECORD_LEN];
        assert_eq!(CalibrationRecord::try_from(&bytes[..]), Err(Error::Version(0xff)));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let bytes = [0; RECORD_LEN + 1];
        assert_eq!(CalibrationRecord::try_from(&bytes[..]), Err(Error::Length(RECORD_LEN + 1)));
    }

    #[test]
    fn decode_accepts_current_version() {
        let bytes = [0x10, 0x27, 0x00, 0x00, FORMAT_VERSION];
        assert_eq!(CalibrationRecord::try_from(&bytes[..]), Ok(CalibrationRecord::new(10_000)));
    }
}
