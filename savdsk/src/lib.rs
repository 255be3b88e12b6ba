#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

mod byte_serializable;
mod converter;
mod disk;
mod format;
mod options;
mod reporter;
mod savdsk_error;
mod utils;

pub use byte_serializable::ByteSerializable;
pub use converter::{dsk_to_sav, sav_to_dsk};
pub use disk::*;
pub use format::*;
pub use options::{ConvertOptions, DEFAULT_DSK_EXTENSION, DEFAULT_SAV_EXTENSION, DEFAULT_SKIP_SECTORS};
pub use reporter::{NullReporter, ProgressReporter};
pub use savdsk_error::{SavDskError, SavDskErrorConvertible};
pub use utils::{read_sector_index, write_sector_index};
