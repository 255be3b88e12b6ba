use core::fmt::{Debug, Display};

pub trait SavDskErrorConvertible: Debug {
    /// Wraps an error raised by an image handler so it can be returned from a conversion.
    fn into_savdsk_error(self) -> SavDskError<Self>
    where
        Self: Sized,
    {
        return SavDskError::HandlerError(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavDskError<E> {
    /// The stream ended part way through a record.
    TruncatedRecord { offset: usize, remaining: usize },
    /// A record named a sector beyond the end of the disk.
    SectorOutOfRange { index: u32, offset: usize },
    /// More sectors were asked to be skipped than the disk holds.
    SkipOutOfRange(usize),
    /// The handler returned fewer bytes than the image reported.
    ShortImage { expected: usize, actual: usize },
    HandlerError(E),
}

impl<E: Display> core::fmt::Display for SavDskError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use SavDskError::*;

        return match self {
            TruncatedRecord { offset, remaining } => write!(
                f,
                "TruncatedRecord: {} trailing bytes at offset {:#x}",
                remaining, offset
            ),
            SectorOutOfRange { index, offset } => write!(
                f,
                "SectorOutOfRange: sector {} at offset {:#x}",
                index, offset
            ),
            SkipOutOfRange(skip) => write!(f, "SkipOutOfRange({})", skip),
            ShortImage { expected, actual } => write!(
                f,
                "ShortImage: expected {} bytes, read {}",
                expected, actual
            ),
            HandlerError(e) => write!(f, "{}", e),
        };
    }
}
