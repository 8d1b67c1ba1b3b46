//! Storage capability supporting persistence during power-off, implemented by calling code.
//!
//! The store drives any [`Storage`] implementation: an EEPROM peripheral, an
//! external I2C/SPI EEPROM driver, or the in-memory [`ram_eeprom::RamEeprom`].

pub mod ram_eeprom;

pub use embedded_storage::{ReadStorage, Storage};

/// Error type of the caller-supplied storage.
pub type StorageError<S> = <S as ReadStorage>::Error;
