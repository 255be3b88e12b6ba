pub const SIDES: usize = 2;
pub const TRACKS_PER_SIDE: usize = 80;
pub const SECTORS_PER_TRACK: usize = 9;
pub const SECTOR_SIZE: usize = 512;

pub const TOTAL_SECTORS: usize = SIDES * TRACKS_PER_SIDE * SECTORS_PER_TRACK;
/// Size in bytes of a full raw image.
pub const IMAGE_SIZE: usize = TOTAL_SECTORS * SECTOR_SIZE;

/// The byte offset of a sector within a raw image, or None if the sector is not on the disk.
#[inline]
pub fn sector_offset(index: usize) -> Option<usize> {
    if index >= TOTAL_SECTORS {
        return None;
    }

    return Some(index * SECTOR_SIZE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(TOTAL_SECTORS, 1440);
        assert_eq!(IMAGE_SIZE, 737_280);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(sector_offset(0), Some(0));
        assert_eq!(sector_offset(1), Some(512));
        assert_eq!(sector_offset(1439), Some(IMAGE_SIZE - SECTOR_SIZE));
    }

    #[test]
    fn test_offset_out_of_range() {
        assert_eq!(sector_offset(1440), None);
        assert_eq!(sector_offset(usize::MAX), None);
    }
}
