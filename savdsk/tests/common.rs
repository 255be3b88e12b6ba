#![allow(dead_code)]

extern crate savdsk;
use std::cell::Cell;
use savdsk::{ImageHandler, ProgressReporter, SavDskErrorConvertible, IMAGE_SIZE, SECTOR_SIZE};

#[derive(Debug, PartialEq)]
pub struct Error {}

impl SavDskErrorConvertible for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "handler error");
    }
}

pub struct Handler {
    pub image: Vec<u8>,
    pub fail_writes: bool,
    /// Hand back one byte less than asked for.
    pub short_reads: bool,
    pub reads: Cell<usize>,
}

impl Handler {
    pub fn new(image: Vec<u8>) -> Self {
        return Self {
            image,
            fail_writes: false,
            short_reads: false,
            reads: Cell::new(0),
        };
    }

    pub fn empty() -> Self {
        return Self::new(Vec::new());
    }

    pub fn failing() -> Self {
        return Self {
            fail_writes: true,
            ..Self::empty()
        };
    }

    pub fn short(image: Vec<u8>) -> Self {
        return Self {
            short_reads: true,
            ..Self::new(image)
        };
    }

    pub fn dump_image(&self) -> Vec<u8> {
        return self.image.clone();
    }
}

impl ImageHandler<Error> for Handler {
    fn read_bytes(&self, location: u64, amount: u64) -> Result<Vec<u8>, Error> {
        self.reads.set(self.reads.get() + 1);

        let start = std::cmp::min(location as usize, self.image.len());
        let mut end = std::cmp::min(start + amount as usize, self.image.len());

        if self.short_reads && end > start {
            end -= 1;
        }

        return Ok(self.image[start..end].to_vec());
    }

    fn write_bytes(&mut self, bytes: &[u8], location: u64) -> Result<(), Error> {
        if self.fail_writes {
            return Err(Error {});
        }

        let location = location as usize;
        if self.image.len() < location + bytes.len() {
            self.image.resize(location + bytes.len(), 0);
        }

        self.image[location..location + bytes.len()].copy_from_slice(bytes);

        return Ok(());
    }

    fn image_size(&self) -> Result<u64, Error> {
        return Ok(self.image.len() as u64);
    }
}

#[derive(Debug, Default)]
pub struct Reporter {
    pub loaded: Option<u64>,
    pub records: Vec<(u32, usize)>,
    pub finished: bool,
    pub failed: bool,
}

impl Reporter {
    pub fn new() -> Self {
        return Self::default();
    }
}

impl ProgressReporter for Reporter {
    fn loaded(&mut self, bytes: u64) {
        self.loaded = Some(bytes);
    }

    fn record(&mut self, index: u32, ordinal: usize) {
        self.records.push((index, ordinal));
    }

    fn finished(&mut self) {
        self.finished = true;
    }

    fn failed(&mut self) {
        self.failed = true;
    }
}

/// A raw image where every sector is filled with a pattern derived from its index.
pub fn patterned_image() -> Vec<u8> {
    let mut image = vec![0u8; IMAGE_SIZE];

    for (i, byte) in image.iter_mut().enumerate() {
        let sector = i / SECTOR_SIZE;
        *byte = ((sector * 7 + i % SECTOR_SIZE) % 251) as u8;
    }

    return image;
}

/// Split a sav stream into (index, payload) pairs.
pub fn split_records(stream: &[u8]) -> Vec<(u32, Vec<u8>)> {
    assert_eq!(stream.len() % 516, 0);

    return stream
        .chunks(516)
        .map(|chunk| {
            let index = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            (index, chunk[4..].to_vec())
        })
        .collect();
}
