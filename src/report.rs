//! Result sinks.
//!
//! A run's only observable output is its per-round record stream, so sinks
//! are deliberately dumb: append-only, header once, no buffering of errors.
//! Where the rows end up (and what the file is called) is the caller's
//! business.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::swap::{ResultSink, RoundRecord};

const HEADER: &str = "round\tedge_cut\tswaps\tmigrations";

/// Writes round records to a tab-separated file.
///
/// The file is created lazily on the first append, together with the header
/// line; a run of zero rounds therefore leaves no file behind. Creation and
/// append failures both surface as errors, which the orchestrator treats as
/// fatal.
///
/// # Examples
///
/// ```no_run
/// use graph_anneal::report::FileSink;
///
/// let sink = FileSink::new("out/ring-1000.tsv");
/// ```
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    /// Creates a sink for the given path. Nothing touches the filesystem
    /// until the first record arrives.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            writer: None,
        }
    }

    /// The destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        let writer = match self.writer.take() {
            Some(writer) => writer,
            None => {
                let mut writer = BufWriter::new(File::create(&self.path)?);
                writeln!(writer, "{HEADER}")?;
                debug!(path = %self.path.display(), "result file created");
                writer
            }
        };
        Ok(self.writer.insert(writer))
    }
}

impl ResultSink for FileSink {
    fn append(&mut self, record: &RoundRecord) -> io::Result<()> {
        let writer = self.writer()?;
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            record.round, record.edge_cut, record.swaps, record.migrations
        )?;
        writer.flush()
    }
}

/// Collects round records in memory. Useful for tests and for embedding
/// the simulation in a larger program that post-processes the series.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<RoundRecord>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The records appended so far, in round order.
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }
}

impl ResultSink for MemorySink {
    fn append(&mut self, record: &RoundRecord) -> io::Result<()> {
        self.records.push(*record);
        Ok(())
    }
}
