//! Save and load of the calibration record at an EEPROM address.

use crate::config::Config;
use crate::device::{ReadStorage, Storage, StorageError};
use crate::record::{CalibrationRecord, FORMAT_VERSION, RECORD_LEN};
use crate::Error;

/// Calibration record persisted through caller-supplied storage.
pub struct CalibrationStore<S> {
    storage: S,
    config: Config,
}

impl<S> CalibrationStore<S>
where
    S: Storage,
{
    /// Creation with the default configuration.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, Config::default())
    }

    /// Creation.
    pub fn with_config(storage: S, config: Config) -> Self {
        Self { storage, config }
    }

    /// Get the store configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Address at which the calibration record lives.
    pub fn config_addr(&self) -> u32 {
        self.config.base_address
    }

    /// Get the caller-supplied storage.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Give the storage back.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Write `record` at `address` in the current format. The version tag of
    /// `record` is set to [`FORMAT_VERSION`] first.
    pub fn save(
        &mut self,
        address: u32,
        record: &mut CalibrationRecord,
    ) -> Result<(), Error<StorageError<S>>> {
        record.struct_version = FORMAT_VERSION;
        debug!("save {=u32} Hz at {=u32}", record.frequency, address);
        self.write(address, &record.encode())
    }

    /// Like [`save`](Self::save), but skips the write when storage already
    /// holds the same bytes. Returns whether a write took place.
    pub fn update(
        &mut self,
        address: u32,
        record: &mut CalibrationRecord,
    ) -> Result<bool, Error<StorageError<S>>> {
        record.struct_version = FORMAT_VERSION;
        let bytes = record.encode();
        if self.read(address)? == bytes {
            trace!("nothing changed {=u32} Hz at {=u32}", record.frequency, address);
            return Ok(false);
        }
        debug!("overwrite with {=u32} Hz at {=u32}", record.frequency, address);
        self.write(address, &bytes)?;
        Ok(true)
    }

    /// Read the record at `address`. `None` when the stored version tag is not
    /// [`FORMAT_VERSION`], including never-written storage.
    pub fn load(
        &mut self,
        address: u32,
    ) -> Result<Option<CalibrationRecord>, Error<StorageError<S>>> {
        let stored = CalibrationRecord::decode_raw(&self.read(address)?);
        if stored.is_current() {
            Ok(Some(stored))
        } else {
            warn!(
                "reject record at {=u32}: version {=u8}, expected {=u8}",
                address,
                stored.struct_version,
                FORMAT_VERSION
            );
            Ok(None)
        }
    }

    /// Read the record at `address` into `record`. Returns `false`, leaving
    /// `record` untouched, when the stored version tag is not
    /// [`FORMAT_VERSION`].
    pub fn load_into(
        &mut self,
        address: u32,
        record: &mut CalibrationRecord,
    ) -> Result<bool, Error<StorageError<S>>> {
        match self.load(address)? {
            Some(stored) => {
                *record = stored;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Read the record at `address`, falling back to `default_frequency` when
    /// no valid record is stored.
    pub fn load_or(
        &mut self,
        address: u32,
        default_frequency: u32,
    ) -> Result<CalibrationRecord, Error<StorageError<S>>> {
        match self.load(address)? {
            Some(stored) => Ok(stored),
            None => {
                info!("no calibration at {=u32}, using {=u32} Hz", address, default_frequency);
                Ok(CalibrationRecord::new(default_frequency))
            }
        }
    }

    /// [`save`](Self::save) at the configured address.
    pub fn save_default(
        &mut self,
        record: &mut CalibrationRecord,
    ) -> Result<(), Error<StorageError<S>>> {
        self.save(self.config_addr(), record)
    }

    /// [`load`](Self::load) from the configured address.
    pub fn load_default(&mut self) -> Result<Option<CalibrationRecord>, Error<StorageError<S>>> {
        self.load(self.config_addr())
    }

    fn check_bounds(&self, address: u32) -> Result<(), Error<StorageError<S>>> {
        let end = usize::try_from(address)
            .ok()
            .and_then(|start| start.checked_add(RECORD_LEN))
            .ok_or(Error::OutOfBounds)?;
        if end > self.storage.capacity() {
            error!("record at {=u32} exceeds capacity {=usize}", address, self.storage.capacity());
            return Err(Error::OutOfBounds);
        }
        Ok(())
    }

    fn read(&mut self, address: u32) -> Result<[u8; RECORD_LEN], Error<StorageError<S>>> {
        self.check_bounds(address)?;
        let mut buf = [0; RECORD_LEN];
        self.storage.read(address, &mut buf).map_err(Error::Storage)?;
        Ok(buf)
    }

    fn write(
        &mut self,
        address: u32,
        bytes: &[u8; RECORD_LEN],
    ) -> Result<(), Error<StorageError<S>>> {
        self.check_bounds(address)?;
        self.storage.write(address, bytes).map_err(Error::Storage)?;
        if self.config.verify_writes && self.read(address)? != *bytes {
            error!("verify failed at {=u32}", address);
            return Err(Error::Verify);
        }
        Ok(())
    }
}
