use super::format::Format;
use crate::cards::hand::Hand;
use crate::solver::outcome::Outcome;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

/// Streams rows back out of an exported table, validating each one.
pub struct Reader<R: BufRead> {
    inner: R,
    format: Format,
    done: bool,
}

impl Reader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>, format: Format) -> anyhow::Result<Self> {
        Self::new(BufReader::new(File::open(path)?), format)
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(mut inner: R, format: Format) -> anyhow::Result<Self> {
        format.expect_header(&mut inner)?;
        Ok(Self {
            inner,
            format,
            done: false,
        })
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = anyhow::Result<(Hand, Outcome)>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.format.read(&mut self.inner) {
            Ok(Some(record)) => Some(<(Hand, Outcome)>::try_from(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::solver::search::Solver;
    use crate::table::writer::Writer;

    fn sample() -> Vec<(Hand, Outcome)> {
        let mut solver = Solver::default();
        std::iter::once(Hand::empty())
            .chain((0..32).map(|_| Hand::random()))
            .map(|h| (h, solver.solve(h)))
            .collect()
    }

    fn round_trip(format: Format) {
        let rows = sample();
        let mut writer = Writer::new(Vec::new(), format).unwrap();
        for &(hand, outcome) in rows.iter() {
            writer.append(hand, outcome).unwrap();
        }
        assert_eq!(writer.rows(), rows.len());
        let bytes = writer.finish().unwrap();
        let read = Reader::new(&bytes[..], format)
            .unwrap()
            .collect::<anyhow::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(read, rows);
    }

    #[test]
    fn round_trip_jsonl() {
        round_trip(Format::Jsonl);
    }

    #[test]
    fn round_trip_pgcopy() {
        round_trip(Format::Pgcopy);
    }

    #[test]
    fn pgcopy_layout() {
        let mut writer = Writer::new(Vec::new(), Format::Pgcopy).unwrap();
        writer.append(Hand::empty(), Outcome::empty()).unwrap();
        let bytes = writer.finish().unwrap();
        // header, then 2 + (4 + 8) + (4 + 2) + 4 for a null move, then trailer
        assert_eq!(bytes.len(), 19 + 24 + 2);
        assert!(bytes.starts_with(b"PGCOPY\n\xFF\r\n\0"));
        assert!(bytes.ends_with(&[0xFF, 0xFF]));
    }

    #[test]
    fn rejects_truncated_pgcopy() {
        assert!(Reader::new(&b"PGCOPY"[..], Format::Pgcopy).is_err());
        let mut writer = Writer::new(Vec::new(), Format::Pgcopy).unwrap();
        writer.append(Hand::empty(), Outcome::empty()).unwrap();
        let bytes = writer.finish().unwrap();
        let truncated = &bytes[..bytes.len() - 6];
        let rows = Reader::new(truncated, Format::Pgcopy)
            .unwrap()
            .collect::<Vec<_>>();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let rows = Reader::new(&b"{\"h\":[1,2,3],\"s\":1}\n"[..], Format::Jsonl)
            .unwrap()
            .collect::<Vec<_>>();
        assert!(rows[0].is_err());
    }
}
