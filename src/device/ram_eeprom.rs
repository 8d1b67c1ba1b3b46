//! EEPROM held in RAM, for host-side simulation and tests.

use embedded_storage::{ReadStorage, Storage};

/// Value of an erased EEPROM cell.
pub const ERASED: u8 = 0xff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Error {
    OutOfBounds,
}

/// Byte-addressable memory of `N` cells that counts every write.
#[derive(Clone)]
pub struct RamEeprom<const N: usize> {
    cells: [u8; N],
    writes: usize,
}

impl<const N: usize> Default for RamEeprom<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RamEeprom<N> {
    /// Creation, every cell erased.
    pub fn new() -> Self {
        Self { cells: [ERASED; N], writes: 0 }
    }

    /// Creation from existing contents.
    pub fn from_bytes(cells: [u8; N]) -> Self {
        Self { cells, writes: 0 }
    }

    /// Raw contents, regardless of what was written.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Raw mutable contents, bypassing the write counter.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Number of write operations performed so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn range(offset: u32, len: usize) -> Result<core::ops::Range<usize>, Error> {
        let start = usize::try_from(offset).map_err(|_| Error::OutOfBounds)?;
        let end = start.checked_add(len).ok_or(Error::OutOfBounds)?;
        if end > N {
            return Err(Error::OutOfBounds);
        }
        Ok(start..end)
    }
}

impl<const N: usize> ReadStorage for RamEeprom<N> {
    type Error = Error;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let range = Self::range(offset, bytes.len())?;
        bytes.copy_from_slice(&self.cells[range]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Storage for RamEeprom<N> {
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let range = Self::range(offset, bytes.len())?;
        self.cells[range].copy_from_slice(bytes);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_erased() {
        let mut eeprom = RamEeprom::<16>::new();
        let mut buf = [0; 4];
        eeprom.read(12, &mut buf).unwrap();
        assert_eq!(buf, [ERASED; 4]);
        assert_eq!(eeprom.capacity(), 16);
    }

    #[test]
    fn write_then_read() {
        let mut eeprom = RamEeprom::<16>::new();
        eeprom.write(3, &[1, 2, 3]).unwrap();
        let mut buf = [0; 5];
        eeprom.read(2, &mut buf).unwrap();
        assert_eq!(buf, [ERASED, 1, 2, 3, ERASED]);
        assert_eq!(eeprom.writes(), 1);
    }

    #[test]
    fn access_past_the_end_fails() {
        let mut eeprom = RamEeprom::<16>::new();
        assert_eq!(eeprom.write(14, &[0; 3]), Err(Error::OutOfBounds));
        assert_eq!(eeprom.read(u32::MAX, &mut [0; 1]), Err(Error::OutOfBounds));
        assert_eq!(eeprom.writes(), 0);
        assert_eq!(eeprom.as_bytes(), &[ERASED; 16][..]);
    }
}
