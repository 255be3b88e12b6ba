/// Receives progress as a conversion runs. Every method defaults to doing nothing.
pub trait ProgressReporter {
    /// The source image has been read. `bytes` is its length on disk.
    fn loaded(&mut self, _bytes: u64) {}

    /// A sav record was decoded or emitted. `ordinal` counts records from zero.
    fn record(&mut self, _index: u32, _ordinal: usize) {}

    /// The destination has been fully written.
    fn finished(&mut self) {}

    /// The conversion stopped with an error.
    fn failed(&mut self) {}
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {}
