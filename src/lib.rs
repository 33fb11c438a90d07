#![doc = r##"
linegroup — rewrite line-oriented fixture files into quoted, bracketed groups.

Each input line is wrapped in double quotes and collected into a group; every
completed group is rendered as `["a","b",...]` on its own output line. It is
meant as a pre-processing step for benchmark input fixtures, e.g. turning a
column of ids into request-body arrays.

Grouping modes
--------------
- [`GroupingMode::Faithful`] (default): the line at every multiple of the group
  size closes the current group and is itself dropped, so groups hold `N - 1`
  items; lines left over at end of input are discarded.
- [`GroupingMode::Flush`]: groups hold exactly `N` items and any remainder is
  emitted as a final shorter group.

Quotes and commas inside lines are passed through unescaped.

Quick start
-----------
```rust
use linegroup::{collect_groups, GroupSize, GroupingParams};

fn main() -> linegroup::Result<()> {
    let params = GroupingParams::new("3".parse::<GroupSize>()?);
    let groups = collect_groups(["A", "B", "C", "D", "E", "F"], params);
    assert_eq!(groups, vec![r#"["A","B"]"#, r#"["D","E"]"#]);
    Ok(())
}
```

Stream a file to any writer
---------------------------
```rust,no_run
use std::path::Path;
use linegroup::{group_file_to_writer, GroupSize, GroupingMode, GroupingParams};

fn main() -> linegroup::Result<()> {
    let params = GroupingParams::new(GroupSize::new(100)?).with_mode(GroupingMode::Flush);
    let stdout = std::io::stdout();
    let stats = group_file_to_writer(Path::new("ids.csv"), &mut stdout.lock(), params)?;
    eprintln!("groups={} lines={}", stats.groups_emitted, stats.lines_read);
    Ok(())
}
```

Error handling
--------------
All fallible functions return `linegroup::Result<T>`; match on `linegroup::Error`
to tell argument problems from I/O failures.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — `GroupSize`, `GroupingParams` and the `LineGrouper` iterator.
- [`io`] — input line sources and the JSON run-report writer.
- [`error`] — crate-level `Error` and `Result`.
"##]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::grouper::{GroupStats, LineGrouper, format_group, quote_line};
pub use crate::core::params::{GroupSize, GroupingParams};
pub use error::{Error, Result};
pub use types::GroupingMode;

// Writers
pub use io::writers::report::{RunReport, write_report};

// High-level API re-exports
pub use api::{collect_groups, group_file_to_writer, group_lines, group_to_writer};
