mod error;
mod handler;
pub mod log;
mod reporter;
mod runner;

pub use error::{Operation, ToolError};
pub use handler::Handler;
pub use reporter::{ProgressStyle, Reporter};
pub use runner::{convert_all, convert_file, output_path, Direction};

use byte_unit::Byte;

pub fn u64_to_sized_string(n: u64) -> String {
    return Byte::from(n).get_appropriate_unit(true).to_string();
}
