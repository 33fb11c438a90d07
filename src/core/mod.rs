//! Core building blocks: validated grouping parameters and the line grouper
//! itself. These are consumed by the high-level `api` module.
pub mod grouper;
pub mod params;
