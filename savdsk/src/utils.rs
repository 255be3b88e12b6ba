use byteorder::{ByteOrder, LittleEndian};

/// Decode the 4 byte little-endian sector index that prefixes every sav record.
pub fn read_sector_index(bytes: &[u8; 4]) -> u32 {
    return LittleEndian::read_u32(bytes);
}

/// Encode a sector index as 4 little-endian bytes.
pub fn write_sector_index(bytes: &mut [u8; 4], index: u32) {
    LittleEndian::write_u32(bytes, index);
}
