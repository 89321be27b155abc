//! The `OutputWriter` trait implemented by backend writers.

use crate::{AntSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends.
///
/// Errors are returned to the caller; [`SimOutputObserver`](crate::SimOutputObserver)
/// stores the first one for retrieval with `take_error`.
pub trait OutputWriter {
    /// Write a batch of ant snapshots.
    fn write_snapshots(&mut self, rows: &[AntSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
