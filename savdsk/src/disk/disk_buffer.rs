use super::geometry::{sector_offset, IMAGE_SIZE, SECTOR_SIZE};
use alloc::{vec, vec::Vec};

/// A whole 2DD disk held in memory. Always exactly `IMAGE_SIZE` bytes long.
#[derive(Clone, PartialEq, Eq)]
pub struct DiskBuffer {
    data: Vec<u8>,
}

impl DiskBuffer {
    pub fn new() -> Self {
        return Self {
            data: vec![0u8; IMAGE_SIZE],
        };
    }

    /// Zero every byte.
    pub fn clear(&mut self) {
        for byte in self.data.iter_mut() {
            *byte = 0;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.data.len();
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        return &self.data;
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        return &mut self.data;
    }

    pub fn sector(&self, index: usize) -> Option<&[u8]> {
        let offset = sector_offset(index)?;
        return Some(&self.data[offset..offset + SECTOR_SIZE]);
    }

    pub fn sector_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        let offset = sector_offset(index)?;
        return Some(&mut self.data[offset..offset + SECTOR_SIZE]);
    }

    /// Replace the contents of a sector. Returns false if the sector is not on the disk.
    pub fn write_sector(&mut self, index: usize, payload: &[u8; SECTOR_SIZE]) -> bool {
        return match self.sector_mut(index) {
            Some(sector) => {
                sector.copy_from_slice(payload);
                true
            }
            None => false,
        };
    }

    /// Zero the buffer then copy in as much of `bytes` as fits. Returns the number of bytes copied.
    pub fn load_prefix(&mut self, bytes: &[u8]) -> usize {
        self.clear();

        let amount = core::cmp::min(bytes.len(), IMAGE_SIZE);
        self.data[..amount].copy_from_slice(&bytes[..amount]);

        return amount;
    }
}

impl Default for DiskBuffer {
    fn default() -> Self {
        return Self::new();
    }
}

impl core::fmt::Debug for DiskBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        return f
            .debug_struct("DiskBuffer")
            .field("len", &self.data.len())
            .finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk::geometry::TOTAL_SECTORS;

    #[test]
    fn test_new_is_zeroed() {
        let buffer = DiskBuffer::new();

        assert_eq!(buffer.len(), IMAGE_SIZE);
        assert!(buffer.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_write_sector() {
        let mut buffer = DiskBuffer::new();
        assert!(buffer.write_sector(3, &[0xaa; SECTOR_SIZE]));

        assert_eq!(buffer.sector(3).unwrap(), &[0xaa; SECTOR_SIZE][..]);
        assert_eq!(buffer.sector(2).unwrap(), &[0u8; SECTOR_SIZE][..]);
        assert_eq!(buffer.sector(4).unwrap(), &[0u8; SECTOR_SIZE][..]);
        assert_eq!(buffer.as_bytes()[3 * 512], 0xaa);
    }

    #[test]
    fn test_sector_out_of_range() {
        let mut buffer = DiskBuffer::new();

        assert!(buffer.sector(TOTAL_SECTORS).is_none());
        assert!(buffer.sector_mut(TOTAL_SECTORS).is_none());
        assert!(!buffer.write_sector(TOTAL_SECTORS, &[1u8; SECTOR_SIZE]));
    }

    #[test]
    fn test_load_prefix_short() {
        let mut buffer = DiskBuffer::new();
        buffer.as_bytes_mut()[1000] = 0x55;

        assert_eq!(buffer.load_prefix(&[1, 2, 3]), 3);
        assert_eq!(&buffer.as_bytes()[..4], &[1, 2, 3, 0]);
        assert_eq!(buffer.as_bytes()[1000], 0);
    }

    #[test]
    fn test_load_prefix_long() {
        let mut buffer = DiskBuffer::new();
        let source = vec![0x7fu8; IMAGE_SIZE + 100];

        assert_eq!(buffer.load_prefix(&source), IMAGE_SIZE);
        assert_eq!(buffer.len(), IMAGE_SIZE);
        assert!(buffer.as_bytes().iter().all(|b| *b == 0x7f));
    }
}
