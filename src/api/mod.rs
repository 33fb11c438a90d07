//! High-level library API: group in-memory lines, buffered readers, or files,
//! writing each completed group to a sink as soon as it closes. Prefer these
//! entrypoints over driving `core::grouper::LineGrouper` by hand.
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::core::grouper::{GroupStats, LineGrouper};
use crate::core::params::GroupingParams;
use crate::error::Result;
use crate::io::{open_lines, reader_lines};

/// Lazily group infallible lines.
pub fn group_lines<L, S>(
    lines: L,
    params: GroupingParams,
) -> LineGrouper<impl Iterator<Item = io::Result<String>>>
where
    L: IntoIterator<Item = S>,
    S: Into<String>,
{
    LineGrouper::new(lines.into_iter().map(|l| Ok::<String, io::Error>(l.into())), params)
}

/// Eagerly group infallible lines.
pub fn collect_groups<L, S>(lines: L, params: GroupingParams) -> Vec<String>
where
    L: IntoIterator<Item = S>,
    S: Into<String>,
{
    // The source never yields errors, so neither does the grouper.
    group_lines(lines, params).flatten().collect()
}

/// Drain `grouper` into `writer`, one group per line. The writer is flushed
/// before any error is returned so that groups already produced stay written.
fn emit_groups<I, W>(mut grouper: LineGrouper<I>, writer: &mut W) -> Result<GroupStats>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let outcome = grouper.try_for_each(|group| -> io::Result<()> {
        let group = group?;
        writeln!(writer, "{}", group)
    });
    let flushed = writer.flush();

    if let Err(e) = outcome {
        warn!(
            "Stopped after {} groups: {}",
            grouper.stats().groups_emitted,
            e
        );
        return Err(e.into());
    }
    flushed?;
    Ok(grouper.stats())
}

/// Group lines read from `reader` and write the groups to `writer`.
pub fn group_to_writer<R, W>(reader: R, writer: &mut W, params: GroupingParams) -> Result<GroupStats>
where
    R: BufRead,
    W: Write,
{
    emit_groups(LineGrouper::new(reader_lines(reader), params), writer)
}

/// Group the lines of the file at `input` and write the groups to `writer`.
/// The file is closed before this returns, on success and on error.
pub fn group_file_to_writer<W: Write>(
    input: &Path,
    writer: &mut W,
    params: GroupingParams,
) -> Result<GroupStats> {
    info!(
        "Grouping {:?} in groups of {} ({} mode)",
        input, params.group_size, params.mode
    );
    let stats = emit_groups(LineGrouper::new(open_lines(input)?, params), writer)?;
    info!(
        "Read {} lines, emitted {} groups, dropped {} boundary lines, discarded {} trailing lines",
        stats.lines_read,
        stats.groups_emitted,
        stats.boundary_lines_dropped,
        stats.tail_lines_discarded
    );
    Ok(stats)
}
