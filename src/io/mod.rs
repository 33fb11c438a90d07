//! I/O layer: scoped line sources for input files and `writers` for the
//! optional run-report sidecar.
pub mod reader;
pub use reader::{FileLines, TextLines, open_lines, reader_lines};

pub mod writers;
