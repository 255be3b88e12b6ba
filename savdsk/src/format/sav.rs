// A sav file is a plain run of records with no header or footer:
// [u32 little-endian sector index][512 bytes of sector data] ...
// The record count is implied by the file length.

use crate::disk::{DiskBuffer, ImageHandler, SECTOR_SIZE, TOTAL_SECTORS};
use crate::utils::{read_sector_index, write_sector_index};
use crate::{ByteSerializable, ProgressReporter, SavDskError, SavDskErrorConvertible};
use core::convert::TryInto;
use tracing::{debug, trace};

pub const INDEX_SIZE: usize = 4;
pub const RECORD_SIZE: usize = INDEX_SIZE + SECTOR_SIZE;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SavRecord {
    index: u32,
    payload: [u8; SECTOR_SIZE],
}

impl SavRecord {
    pub fn new(index: u32, payload: [u8; SECTOR_SIZE]) -> Self {
        return Self { index, payload };
    }

    /// Build a record from a sector of the buffer. None if the sector is not on the disk.
    pub fn from_sector(buffer: &DiskBuffer, index: usize) -> Option<Self> {
        let sector = buffer.sector(index)?;
        let mut payload = [0u8; SECTOR_SIZE];
        payload.copy_from_slice(sector);

        return Some(Self::new(index as u32, payload));
    }

    #[inline]
    pub fn index(&self) -> u32 {
        return self.index;
    }

    #[inline]
    pub fn payload(&self) -> &[u8; SECTOR_SIZE] {
        return &self.payload;
    }
}

impl ByteSerializable for SavRecord {
    type BytesArrayType = [u8; RECORD_SIZE];

    fn to_bytes(&self) -> Self::BytesArrayType {
        let mut bytes = [0u8; RECORD_SIZE];
        let mut index = [0u8; INDEX_SIZE];

        write_sector_index(&mut index, self.index);
        bytes[..INDEX_SIZE].copy_from_slice(&index);
        bytes[INDEX_SIZE..].copy_from_slice(&self.payload);

        return bytes;
    }

    /// Does not check the index against the disk geometry.
    fn from_bytes(bytes: &[u8]) -> Option<Self>
    where
        Self: core::marker::Sized,
    {
        if bytes.len() < RECORD_SIZE {
            return None;
        }

        let index_bytes: &[u8; INDEX_SIZE] = bytes[..INDEX_SIZE].try_into().ok()?;
        let mut payload = [0u8; SECTOR_SIZE];
        payload.copy_from_slice(&bytes[INDEX_SIZE..RECORD_SIZE]);

        return Some(Self::new(read_sector_index(index_bytes), payload));
    }

    fn generic_bytes_rep(bytes: &Self::BytesArrayType) -> &[u8] {
        return bytes;
    }
}

/// Decode a complete sav stream into the buffer, which is zeroed first.
/// Records are applied in stream order so a repeated sector keeps its last payload.
/// Returns the number of records decoded.
pub fn decode_sav<E>(
    bytes: &[u8],
    buffer: &mut DiskBuffer,
    reporter: &mut dyn ProgressReporter,
) -> Result<usize, SavDskError<E>> {
    buffer.clear();

    let mut offset = 0;
    let mut count = 0;

    while offset < bytes.len() {
        let remaining = bytes.len() - offset;

        let record = match SavRecord::from_bytes(&bytes[offset..]) {
            Some(r) => r,
            None => return Err(SavDskError::TruncatedRecord { offset, remaining }),
        };

        if record.index() as usize >= TOTAL_SECTORS {
            return Err(SavDskError::SectorOutOfRange {
                index: record.index(),
                offset,
            });
        }

        trace!("sector {} at offset {:#x}", record.index(), offset);
        reporter.record(record.index(), count);
        buffer.write_sector(record.index() as usize, record.payload());

        offset += RECORD_SIZE;
        count += 1;
    }

    debug!("decoded {} sav records", count);

    return Ok(count);
}

/// Read a whole sav image from the handler and decode it into the buffer.
pub fn read_sav<E: SavDskErrorConvertible>(
    source: &dyn ImageHandler<E>,
    buffer: &mut DiskBuffer,
    reporter: &mut dyn ProgressReporter,
) -> Result<usize, SavDskError<E>> {
    let size = unwrap_error_savdsk_convertible!(source.image_size());

    // Misaligned streams are rejected without reading them.
    let remaining = (size % RECORD_SIZE as u64) as usize;
    if remaining != 0 {
        return Err(SavDskError::TruncatedRecord {
            offset: (size - remaining as u64) as usize,
            remaining,
        });
    }

    let bytes = unwrap_error_savdsk_convertible!(source.read_bytes(0, size));

    if (bytes.len() as u64) != size {
        return Err(SavDskError::ShortImage {
            expected: size as usize,
            actual: bytes.len(),
        });
    }

    reporter.loaded(size);

    return decode_sav(&bytes, buffer, reporter);
}

/// Write every sector from `skip_sectors` to the end of the disk as a sav record, in ascending order.
/// Returns the number of records written.
pub fn write_sav<E: SavDskErrorConvertible>(
    buffer: &DiskBuffer,
    skip_sectors: usize,
    dest: &mut dyn ImageHandler<E>,
    reporter: &mut dyn ProgressReporter,
) -> Result<usize, SavDskError<E>> {
    if skip_sectors > TOTAL_SECTORS {
        return Err(SavDskError::SkipOutOfRange(skip_sectors));
    }

    let mut location = 0u64;

    for (ordinal, index) in (skip_sectors..TOTAL_SECTORS).enumerate() {
        let record = match SavRecord::from_sector(buffer, index) {
            Some(r) => r,
            None => return Err(SavDskError::SkipOutOfRange(skip_sectors)),
        };

        reporter.record(record.index(), ordinal);
        unwrap_error_savdsk_convertible!(dest.write_bytes(&record.to_bytes(), location));
        location += RECORD_SIZE as u64;
    }

    let count = TOTAL_SECTORS - skip_sectors;
    debug!("wrote {} sav records ({} bytes)", count, location);

    return Ok(count);
}
