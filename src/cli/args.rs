use clap::Parser;
use std::path::PathBuf;

use linegroup::GroupingMode;

#[derive(Parser, Debug)]
#[command(
    name = "linegroup",
    version,
    about = "Rewrite a line-oriented file into quoted, bracketed groups"
)]
pub struct CliArgs {
    /// Input file, one item per line
    pub input: PathBuf,

    /// Lines per group (base-10 integer, at least 1)
    #[arg(allow_hyphen_values = true)]
    pub group_size: String,

    /// Grouping mode. `faithful` drops every N-th line and discards the
    /// trailing partial group; `flush` keeps every line
    #[arg(long, value_enum, default_value_t = GroupingMode::Faithful)]
    pub mode: GroupingMode,

    /// Write a JSON run report to this path after processing
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable logging (to stderr)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = CliArgs::try_parse_from(["linegroup", "ids.csv", "3"]).unwrap();
        assert_eq!(args.input, PathBuf::from("ids.csv"));
        assert_eq!(args.group_size, "3");
        assert_eq!(args.mode, GroupingMode::Faithful);
        assert!(args.report.is_none());
        assert!(!args.log);
    }

    #[test]
    fn test_negative_group_size_reaches_validation() {
        let args = CliArgs::try_parse_from(["linegroup", "ids.csv", "-2"]).unwrap();
        assert_eq!(args.group_size, "-2");
    }

    #[test]
    fn test_options() {
        let args = CliArgs::try_parse_from([
            "linegroup", "ids.csv", "4", "--mode", "flush", "--report", "run.json", "--log",
        ])
        .unwrap();
        assert_eq!(args.mode, GroupingMode::Flush);
        assert_eq!(args.report, Some(PathBuf::from("run.json")));
        assert!(args.log);
    }

    #[test]
    fn test_missing_group_size() {
        assert!(CliArgs::try_parse_from(["linegroup", "ids.csv"]).is_err());
    }
}
