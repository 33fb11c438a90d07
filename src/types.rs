//! Shared types used across linegroup.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How group boundaries are handled.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    /// Every N-th line closes the current group and is itself dropped;
    /// a trailing partial group is discarded.
    #[default]
    Faithful,
    /// Groups hold exactly N lines; a trailing partial group is emitted.
    Flush,
}

impl std::fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupingMode::Faithful => write!(f, "faithful"),
            GroupingMode::Flush => write!(f, "flush"),
        }
    }
}
