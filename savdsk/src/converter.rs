use crate::disk::{apply_bpb, DiskBuffer, ImageHandler, TOTAL_SECTORS};
use crate::format::{read_dsk, read_sav, write_dsk, write_sav};
use crate::{ConvertOptions, ProgressReporter, SavDskError, SavDskErrorConvertible};
use tracing::info;

/// Convert a raw image into a sav stream, leaving out the first `options.skip_sectors()` sectors.
pub fn dsk_to_sav<E: SavDskErrorConvertible>(
    source: &dyn ImageHandler<E>,
    dest: &mut dyn ImageHandler<E>,
    options: &ConvertOptions,
    reporter: &mut dyn ProgressReporter,
) -> Result<(), SavDskError<E>> {
    return match run_dsk_to_sav(source, dest, options.skip_sectors(), reporter) {
        Ok(count) => {
            reporter.finished();
            info!("dsk -> sav: {} records", count);
            Ok(())
        }
        Err(e) => {
            reporter.failed();
            Err(e)
        }
    };
}

/// Convert a sav stream into a full raw image with a fresh boot sector header.
/// Every sav file maps onto the same geometry so there is nothing to configure.
pub fn sav_to_dsk<E: SavDskErrorConvertible>(
    source: &dyn ImageHandler<E>,
    dest: &mut dyn ImageHandler<E>,
    reporter: &mut dyn ProgressReporter,
) -> Result<(), SavDskError<E>> {
    return match run_sav_to_dsk(source, dest, reporter) {
        Ok(count) => {
            reporter.finished();
            info!("sav -> dsk: {} records", count);
            Ok(())
        }
        Err(e) => {
            reporter.failed();
            Err(e)
        }
    };
}

fn run_dsk_to_sav<E: SavDskErrorConvertible>(
    source: &dyn ImageHandler<E>,
    dest: &mut dyn ImageHandler<E>,
    skip_sectors: usize,
    reporter: &mut dyn ProgressReporter,
) -> Result<usize, SavDskError<E>> {
    if skip_sectors > TOTAL_SECTORS {
        return Err(SavDskError::SkipOutOfRange(skip_sectors));
    }

    let mut buffer = DiskBuffer::new();

    read_dsk(source, &mut buffer, reporter)?;
    return write_sav(&buffer, skip_sectors, dest, reporter);
}

fn run_sav_to_dsk<E: SavDskErrorConvertible>(
    source: &dyn ImageHandler<E>,
    dest: &mut dyn ImageHandler<E>,
    reporter: &mut dyn ProgressReporter,
) -> Result<usize, SavDskError<E>> {
    let mut buffer = DiskBuffer::new();

    let count = read_sav(source, &mut buffer, reporter)?;
    apply_bpb(&mut buffer);
    write_dsk(&buffer, dest)?;

    return Ok(count);
}
