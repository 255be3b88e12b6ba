use alloc::string::{String, ToString};

/// Number of leading sectors left out of a sav file when nothing else is asked for.
/// Sector 0 holds the boot sector, which is rebuilt when converting back.
pub const DEFAULT_SKIP_SECTORS: usize = 1;
pub const DEFAULT_SAV_EXTENSION: &str = ".sav";
pub const DEFAULT_DSK_EXTENSION: &str = ".2dd";

/// Settings for a batch of conversions. Built once and shared read-only by every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    skip_sectors: usize,
    extension: String,
}

impl ConvertOptions {
    pub fn new(skip_sectors: usize, extension: &str) -> Self {
        return Self {
            skip_sectors,
            extension: extension.to_string(),
        };
    }

    /// Defaults for converting raw images into sav files.
    pub fn for_sav() -> Self {
        return Self::new(DEFAULT_SKIP_SECTORS, DEFAULT_SAV_EXTENSION);
    }

    /// Defaults for converting sav files into raw images.
    pub fn for_dsk() -> Self {
        return Self::new(DEFAULT_SKIP_SECTORS, DEFAULT_DSK_EXTENSION);
    }

    /// Same settings with a different output extension.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        return self;
    }

    /// Only used when writing sav files.
    #[inline]
    pub fn skip_sectors(&self) -> usize {
        return self.skip_sectors;
    }

    /// The extension given to output files, possibly with a leading dot.
    #[inline]
    pub fn extension(&self) -> &str {
        return &self.extension;
    }
}
