//! Per-round output record and the sink it flows into.

use std::io;

/// Metrics computed after each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRecord {
    /// Round index, `0..rounds`.
    pub round: usize,
    /// Number of undirected edges whose endpoints currently hold different
    /// colors.
    pub edge_cut: usize,
    /// Accepted swaps during this round only.
    pub swaps: usize,
    /// Nodes whose current color differs from their initial color at the
    /// end of the round. Recomputed fresh each round, never cumulative.
    pub migrations: usize,
}

/// Append-only consumer of round records.
///
/// The report is a run's only observable output, so any failure here is
/// fatal to the run: the orchestrator aborts rather than continue with a
/// gap in the data.
pub trait ResultSink {
    /// Appends one record. Implementations that write a header must do so
    /// on the first append.
    fn append(&mut self, record: &RoundRecord) -> io::Result<()>;
}
