use crate::SavDskErrorConvertible;
use alloc::vec::Vec;

/// Implementors provide byte level access to an image, whether a file on disk or memory.
/// Locations and amounts are all in bytes.
pub trait ImageHandler<E: SavDskErrorConvertible> {
    /// Read up to `amount` bytes starting at `location`. Fewer bytes are returned only when the image ends first.
    fn read_bytes(&self, location: u64, amount: u64) -> Result<Vec<u8>, E>;

    /// Write bytes at a location, growing the image if needed.
    fn write_bytes(&mut self, bytes: &[u8], location: u64) -> Result<(), E>;

    /// The current length of the image.
    fn image_size(&self) -> Result<u64, E>;
}
