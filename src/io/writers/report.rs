use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::core::grouper::GroupStats;
use crate::core::params::GroupingParams;
use crate::error::Result;

/// Summary of one grouping run, written as a JSON sidecar
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub params: GroupingParams,
    pub stats: GroupStats,
    pub generated_at: DateTime<Utc>,
}

impl RunReport {
    pub fn new(input: &Path, params: GroupingParams, stats: GroupStats) -> Self {
        Self {
            input: input.to_path_buf(),
            params,
            stats,
            generated_at: Utc::now(),
        }
    }
}

/// Write `report` as pretty-printed JSON to `path`
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let json_string = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json_string)?;

    info!("Created run report: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::GroupSize;
    use tempfile::TempDir;

    #[test]
    fn test_write_report_round_trip_fields() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("run.json");
        let stats = GroupStats {
            lines_read: 5,
            groups_emitted: 1,
            boundary_lines_dropped: 1,
            tail_lines_discarded: 2,
        };
        let report = RunReport::new(
            Path::new("ids.csv"),
            GroupingParams::new(GroupSize::new(3).unwrap()),
            stats,
        );

        write_report(&report_path, &report).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(value["input"], "ids.csv");
        assert_eq!(value["params"]["group_size"], 3);
        assert_eq!(value["params"]["mode"], "faithful");
        assert_eq!(value["stats"]["tail_lines_discarded"], 2);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_write_report_into_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("nope").join("run.json");
        let report = RunReport::new(
            Path::new("ids.csv"),
            GroupingParams::new(GroupSize::new(2).unwrap()),
            GroupStats::default(),
        );
        assert!(write_report(&report_path, &report).is_err());
    }
}
