use crate::disk::{DiskBuffer, ImageHandler, IMAGE_SIZE};
use crate::{ProgressReporter, SavDskError, SavDskErrorConvertible};
use core::cmp::min;
use tracing::{debug, warn};

/// Load a raw image into the buffer. Short images leave the tail zeroed, anything past
/// `IMAGE_SIZE` is ignored. Returns the length of the source.
pub fn read_dsk<E: SavDskErrorConvertible>(
    source: &dyn ImageHandler<E>,
    buffer: &mut DiskBuffer,
    reporter: &mut dyn ProgressReporter,
) -> Result<u64, SavDskError<E>> {
    let size = unwrap_error_savdsk_convertible!(source.image_size());
    let amount = min(size, IMAGE_SIZE as u64);
    let bytes = unwrap_error_savdsk_convertible!(source.read_bytes(0, amount));

    if (bytes.len() as u64) != amount {
        return Err(SavDskError::ShortImage {
            expected: amount as usize,
            actual: bytes.len(),
        });
    }

    if size != IMAGE_SIZE as u64 {
        warn!("raw image is {} bytes, expected {}", size, IMAGE_SIZE);
    }

    buffer.load_prefix(&bytes);
    reporter.loaded(size);
    debug!("loaded {} bytes of raw image", amount);

    return Ok(size);
}

/// Write the whole buffer verbatim.
pub fn write_dsk<E: SavDskErrorConvertible>(
    buffer: &DiskBuffer,
    dest: &mut dyn ImageHandler<E>,
) -> Result<(), SavDskError<E>> {
    unwrap_error_savdsk_convertible!(dest.write_bytes(buffer.as_bytes(), 0));
    return Ok(());
}
