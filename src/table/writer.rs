use super::format::Format;
use super::record::Record;
use crate::cards::hand::Hand;
use crate::solver::outcome::Outcome;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Appends solved hands to a table in one of the export formats.
/// Rows land in the order they are appended.
pub struct Writer<W: Write> {
    inner: W,
    format: Format,
    rows: usize,
}

impl Writer<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>, format: Format) -> anyhow::Result<Self> {
        log::info!("{:<32}{:<32}", "writing table", path.as_ref().display());
        Self::new(BufWriter::new(File::create(path)?), format)
    }
}

impl<W: Write> Writer<W> {
    pub fn new(mut inner: W, format: Format) -> anyhow::Result<Self> {
        format.header(&mut inner)?;
        Ok(Self {
            inner,
            format,
            rows: 0,
        })
    }
    pub fn append(&mut self, hand: Hand, outcome: Outcome) -> anyhow::Result<()> {
        self.format
            .write(&mut self.inner, &Record::from((hand, outcome)))?;
        self.rows += 1;
        Ok(())
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// close the table and hand back the sink
    pub fn finish(mut self) -> anyhow::Result<W> {
        self.format.footer(&mut self.inner)?;
        self.inner.flush()?;
        log::debug!("{:<32}{:<32}", "rows written", self.rows);
        Ok(self.inner)
    }
}
