mod dsk;
mod sav;

pub use dsk::{read_dsk, write_dsk};
pub use sav::{decode_sav, read_sav, write_sav, SavRecord, INDEX_SIZE, RECORD_SIZE};
