pub mod report;
pub use report::{RunReport, write_report};
