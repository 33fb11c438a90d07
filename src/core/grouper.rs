//! The line grouper: a lazy iterator adapter that turns a stream of lines into
//! formatted groups.
//!
//! In [`GroupingMode::Faithful`] every line whose 1-based position is a multiple
//! of the group size closes the current group and is itself dropped, so each
//! emitted group holds `N - 1` items. Lines still pending at end of input are
//! discarded. [`GroupingMode::Flush`] keeps every line and emits the remainder.
use std::io;

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::params::GroupingParams;
use crate::types::GroupingMode;

/// Upper bound on the accumulator's initial reservation; larger groups grow on demand.
const ACC_CAPACITY_HINT: usize = 1024;

/// Counters describing a grouping run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupStats {
    pub lines_read: u64,
    pub groups_emitted: u64,
    pub boundary_lines_dropped: u64,
    pub tail_lines_discarded: u64,
}

/// Wrap a line in double quotes after stripping trailing whitespace.
/// Embedded quotes and commas are not escaped.
pub fn quote_line(line: &str) -> String {
    format!("\"{}\"", line.trim_end())
}

/// Render already-quoted items as `[a,b,c]`.
pub fn format_group<S: AsRef<str>>(items: &[S]) -> String {
    let len: usize = items.iter().map(|s| s.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(len + 2);
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(item.as_ref());
    }
    out.push(']');
    out
}

/// Iterator over formatted groups. Source errors are yielded once, after which
/// the grouper is exhausted.
pub struct LineGrouper<I> {
    lines: I,
    params: GroupingParams,
    acc: Vec<String>,
    counter: u64,
    stats: GroupStats,
    done: bool,
}

impl<I> LineGrouper<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(lines: I, params: GroupingParams) -> Self {
        let group_size = params.group_size.get();
        Self {
            lines,
            params,
            acc: Vec::with_capacity(group_size.min(ACC_CAPACITY_HINT)),
            counter: 1,
            stats: GroupStats::default(),
            done: false,
        }
    }

    pub fn stats(&self) -> GroupStats {
        self.stats
    }

    fn take_group(&mut self) -> String {
        let group = format_group(&self.acc);
        self.acc.clear();
        self.stats.groups_emitted += 1;
        debug!(group = self.stats.groups_emitted, line = self.counter, "group complete");
        group
    }

    fn finish(&mut self) -> Option<String> {
        self.done = true;
        if self.acc.is_empty() {
            return None;
        }
        match self.params.mode {
            GroupingMode::Faithful => {
                let pending = self.acc.len() as u64;
                self.stats.tail_lines_discarded += pending;
                self.acc.clear();
                warn!(lines = pending, "discarding incomplete trailing group");
                None
            }
            GroupingMode::Flush => Some(self.take_group()),
        }
    }
}

impl<I> Iterator for LineGrouper<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let size = self.params.group_size.get() as u64;

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => return self.finish().map(Ok),
            };
            self.stats.lines_read += 1;

            let emitted = match self.params.mode {
                GroupingMode::Faithful => {
                    if self.counter % size == 0 {
                        self.stats.boundary_lines_dropped += 1;
                        Some(self.take_group())
                    } else {
                        self.acc.push(quote_line(&line));
                        None
                    }
                }
                GroupingMode::Flush => {
                    self.acc.push(quote_line(&line));
                    if self.acc.len() as u64 == size {
                        Some(self.take_group())
                    } else {
                        None
                    }
                }
            };
            self.counter += 1;

            if let Some(group) = emitted {
                return Some(Ok(group));
            }
        }
    }
}
