// 2DD layout:
// 2 sides, 80 tracks per side, 9 sectors per track, 512 bytes per sector.
// Sectors are numbered 0..1440 and stored back to back.

mod bpb;
mod disk_buffer;
pub mod geometry;
pub mod image_handler;

pub use bpb::{apply_bpb, BiosParameterBlock, BPB_SIZE, BPB_TEMPLATE};
pub use disk_buffer::DiskBuffer;
pub use geometry::{
    sector_offset, IMAGE_SIZE, SECTORS_PER_TRACK, SECTOR_SIZE, SIDES, TOTAL_SECTORS,
    TRACKS_PER_SIDE,
};
pub use image_handler::ImageHandler;
