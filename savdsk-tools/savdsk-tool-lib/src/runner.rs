use crate::error::ToolError;
use crate::handler::Handler;
use crate::reporter::{ProgressStyle, Reporter};
use savdsk::{dsk_to_sav, sav_to_dsk, ConvertOptions, SavDskError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    DskToSav,
    SavToDsk,
}

impl Direction {
    fn progress_style(&self) -> ProgressStyle {
        return match self {
            Direction::DskToSav => ProgressStyle::Dotted,
            Direction::SavToDsk => ProgressStyle::Listed,
        };
    }
}

/// Replace the extension of `input`. The extension may be given with or without its leading dot.
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    return input.with_extension(extension.trim_start_matches('.'));
}

/// Convert a single file, writing next to it with the configured extension.
pub fn convert_file(
    input: &Path,
    direction: Direction,
    options: &ConvertOptions,
    quiet: bool,
) -> Result<PathBuf, SavDskError<ToolError>> {
    let output = output_path(input, options.extension());
    println!("{:?} -> {:?}", input, output);

    let source = match Handler::open(input) {
        Ok(h) => h,
        Err(e) => return Err(SavDskError::HandlerError(e)),
    };

    let mut dest = match Handler::create(&output) {
        Ok(h) => h,
        Err(e) => return Err(SavDskError::HandlerError(e)),
    };

    let mut reporter = Reporter::new(direction.progress_style(), quiet);

    let result = match direction {
        Direction::DskToSav => dsk_to_sav(&source, &mut dest, options, &mut reporter),
        Direction::SavToDsk => sav_to_dsk(&source, &mut dest, &mut reporter),
    };

    match result {
        Ok(_) => (),
        Err(e) => {
            dest.discard();
            return Err(e);
        }
    }

    debug!("committing {}", dest.path().display());

    match dest.commit() {
        Ok(_) => (),
        Err(e) => return Err(SavDskError::HandlerError(e)),
    }

    info!("wrote {}", output.display());

    return Ok(output);
}

/// Convert each file in turn. A failure is reported and the next file is still attempted.
/// Returns the number of files that failed.
pub fn convert_all(
    inputs: &[PathBuf],
    direction: Direction,
    options: &ConvertOptions,
    quiet: bool,
) -> usize {
    let mut failures = 0;

    for input in inputs.iter() {
        match convert_file(input, direction, options, quiet) {
            Ok(_) => (),
            Err(SavDskError::HandlerError(e)) => {
                eprintln!("{}", e);
                failures += 1;
            }
            Err(e) => {
                eprintln!("conversion error : {:?} ({})", input, e);
                failures += 1;
            }
        }
    }

    return failures;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_with_dot() {
        assert_eq!(output_path(Path::new("games/disk.dsk"), ".sav"), PathBuf::from("games/disk.sav"));
    }

    #[test]
    fn test_output_path_without_dot() {
        assert_eq!(output_path(Path::new("disk.sav"), "2dd"), PathBuf::from("disk.2dd"));
    }

    #[test]
    fn test_output_path_no_extension() {
        assert_eq!(output_path(Path::new("disk"), ".sav"), PathBuf::from("disk.sav"));
    }
}
