use crate::u64_to_sized_string;
use savdsk::ProgressReporter;
use std::io::{self, Write};

/// Records per progress line when printing dots.
const DOTS_PER_LINE: usize = 40;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProgressStyle {
    /// `sector N` at the start of every line followed by a dot per record.
    Dotted,
    /// One `sector N` line per record.
    Listed,
}

/// Prints conversion progress to stdout. Progress is best effort: a closed
/// stdout is ignored and never stops a conversion.
#[derive(Debug)]
pub struct Reporter {
    style: ProgressStyle,
    quiet: bool,
    open_line: bool,
}

impl Reporter {
    pub fn new(style: ProgressStyle, quiet: bool) -> Self {
        return Self {
            style,
            quiet,
            open_line: false,
        };
    }

    fn end_line(&mut self) {
        if self.open_line {
            let _ = writeln!(io::stdout().lock());
            self.open_line = false;
        }
    }
}

impl ProgressReporter for Reporter {
    fn loaded(&mut self, bytes: u64) {
        let _ = writeln!(
            io::stdout().lock(),
            "{} bytes ({})",
            bytes,
            u64_to_sized_string(bytes)
        );
    }

    fn record(&mut self, index: u32, ordinal: usize) {
        if self.quiet {
            return;
        }

        match self.style {
            ProgressStyle::Dotted => {
                if ordinal % DOTS_PER_LINE == 0 {
                    self.end_line();
                    let _ = write!(io::stdout().lock(), "sector {} ", index);
                } else {
                    let _ = write!(io::stdout().lock(), ".");
                }

                self.open_line = true;
                let _ = io::stdout().flush();
            }
            ProgressStyle::Listed => {
                let _ = writeln!(io::stdout().lock(), "sector {}", index);
            }
        }
    }

    fn finished(&mut self) {
        self.end_line();
    }

    fn failed(&mut self) {
        self.end_line();
    }
}
