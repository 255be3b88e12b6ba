use super::disk_buffer::DiskBuffer;
use super::geometry::{SECTORS_PER_TRACK, SECTOR_SIZE, SIDES, TOTAL_SECTORS};
use crate::ByteSerializable;
use byteorder::{ByteOrder, LittleEndian};

pub const BPB_SIZE: usize = 30;

/// The boot sector header written to every raw image rebuilt from a sav file.
pub const BPB_TEMPLATE: [u8; BPB_SIZE] = [
    0xeb, 0xfe, 0x90, // short jump
    b'U', b'N', b'K', b'N', b'O', b'W', b'N', b' ', // OEM name
    0x00, 0x02, 0x02, 0x01, 0x00, // sector size, cluster size, reserved sectors
    0x02, 0x70, 0x00, 0xa0, 0x05, // FAT count, root entries, total sectors
    0xf9, 0x03, 0x00, 0x09, 0x00, // media id, FAT size, sectors per track
    0x02, 0x00, 0x00, 0x00, // sides, hidden sectors
];

const JUMP: [u8; 3] = [0xeb, 0xfe, 0x90];
const OEM_NAME: [u8; 8] = *b"UNKNOWN ";
const MEDIA_2DD: u8 = 0xf9;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BiosParameterBlock {
    /// x86 jump over the header
    pub jump: [u8; 3],
    pub oem_name: [u8; 8],

    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sectors: u16,
    pub fat_count: u8,
    pub root_entries: u16,
    pub total_sectors: u16,
    pub media_descriptor: u8,
    pub sectors_per_fat: u16,
    pub sectors_per_track: u16,
    pub sides: u16,
    pub hidden_sectors: u16,
}

impl Default for BiosParameterBlock {
    /// The header of a freshly formatted 2DD disk.
    fn default() -> Self {
        return Self {
            jump: JUMP,
            oem_name: OEM_NAME,
            bytes_per_sector: SECTOR_SIZE as u16,
            sectors_per_cluster: 2,
            reserved_sectors: 1,
            fat_count: 2,
            root_entries: 112,
            total_sectors: TOTAL_SECTORS as u16,
            media_descriptor: MEDIA_2DD,
            sectors_per_fat: 3,
            sectors_per_track: SECTORS_PER_TRACK as u16,
            sides: SIDES as u16,
            hidden_sectors: 0,
        };
    }
}

impl ByteSerializable for BiosParameterBlock {
    type BytesArrayType = [u8; BPB_SIZE];

    fn to_bytes(&self) -> Self::BytesArrayType {
        let mut bytes = [0u8; BPB_SIZE];

        bytes[0x00..0x03].copy_from_slice(&self.jump);
        bytes[0x03..0x0b].copy_from_slice(&self.oem_name);

        LittleEndian::write_u16(&mut bytes[0x0b..], self.bytes_per_sector);
        bytes[0x0d] = self.sectors_per_cluster;
        LittleEndian::write_u16(&mut bytes[0x0e..], self.reserved_sectors);
        bytes[0x10] = self.fat_count;
        LittleEndian::write_u16(&mut bytes[0x11..], self.root_entries);
        LittleEndian::write_u16(&mut bytes[0x13..], self.total_sectors);
        bytes[0x15] = self.media_descriptor;
        LittleEndian::write_u16(&mut bytes[0x16..], self.sectors_per_fat);
        LittleEndian::write_u16(&mut bytes[0x18..], self.sectors_per_track);
        LittleEndian::write_u16(&mut bytes[0x1a..], self.sides);
        LittleEndian::write_u16(&mut bytes[0x1c..], self.hidden_sectors);

        return bytes;
    }

    fn from_bytes(bytes: &[u8]) -> Option<Self>
    where
        Self: core::marker::Sized,
    {
        if bytes.len() < BPB_SIZE {
            return None;
        }

        let mut jump = [0u8; 3];
        jump.copy_from_slice(&bytes[0x00..0x03]);
        let mut oem_name = [0u8; 8];
        oem_name.copy_from_slice(&bytes[0x03..0x0b]);

        return Some(Self {
            jump,
            oem_name,
            bytes_per_sector: LittleEndian::read_u16(&bytes[0x0b..]),
            sectors_per_cluster: bytes[0x0d],
            reserved_sectors: LittleEndian::read_u16(&bytes[0x0e..]),
            fat_count: bytes[0x10],
            root_entries: LittleEndian::read_u16(&bytes[0x11..]),
            total_sectors: LittleEndian::read_u16(&bytes[0x13..]),
            media_descriptor: bytes[0x15],
            sectors_per_fat: LittleEndian::read_u16(&bytes[0x16..]),
            sectors_per_track: LittleEndian::read_u16(&bytes[0x18..]),
            sides: LittleEndian::read_u16(&bytes[0x1a..]),
            hidden_sectors: LittleEndian::read_u16(&bytes[0x1c..]),
        });
    }

    fn generic_bytes_rep(bytes: &Self::BytesArrayType) -> &[u8] {
        return bytes;
    }
}

/// Overwrite the start of the buffer with the default 2DD header.
pub fn apply_bpb(buffer: &mut DiskBuffer) {
    let bpb = BiosParameterBlock::default().to_bytes();
    buffer.as_bytes_mut()[..BPB_SIZE].copy_from_slice(&bpb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_template() {
        assert_eq!(BiosParameterBlock::default().to_bytes(), BPB_TEMPLATE);
    }

    #[test]
    fn test_from_bytes() {
        let bpb = BiosParameterBlock::from_bytes(&BPB_TEMPLATE).unwrap();

        assert_eq!(bpb, BiosParameterBlock::default());
        assert_eq!(bpb.bytes_per_sector, 512);
        assert_eq!(bpb.root_entries, 112);
        assert_eq!(bpb.total_sectors, 1440);
        assert_eq!(&bpb.oem_name, b"UNKNOWN ");
    }

    #[test]
    fn test_from_bytes_too_short() {
        assert!(BiosParameterBlock::from_bytes(&BPB_TEMPLATE[..29]).is_none());
    }

    #[test]
    fn test_apply_overwrites() {
        let mut buffer = DiskBuffer::new();
        for byte in buffer.as_bytes_mut()[..64].iter_mut() {
            *byte = 0xcc;
        }

        apply_bpb(&mut buffer);

        assert_eq!(&buffer.as_bytes()[..BPB_SIZE], &BPB_TEMPLATE[..]);
        assert_eq!(buffer.as_bytes()[BPB_SIZE], 0xcc);
    }

    #[test]
    fn test_apply_idempotent() {
        let mut once = DiskBuffer::new();
        apply_bpb(&mut once);

        let mut twice = once.clone();
        apply_bpb(&mut twice);

        assert!(once == twice);
    }
}
