use super::record::Record;
use crate::N_RANKS;
use crate::cards::hand::Hand;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::io::BufRead;
use std::io::Write;

/// On-disk layout of an exported table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// one JSON object per line
    #[default]
    Jsonl,
    /// Postgres binary COPY, columns (hand BIGINT, plays SMALLINT, move INTEGER NULL)
    Pgcopy,
}

const N_FIELDS: u16 = 3;
const TRAILER: u16 = 0xFFFF;
const NULL: i32 = -1;

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jsonl => "jsonl",
            Self::Pgcopy => "pgcopy",
        }
    }

    /// Postgres signature header + 8 null bytes for flags and extension
    /// header for binary copy: https://www.postgresql.org/docs/current/static/sql-copy.html
    fn signature() -> &'static [u8] {
        b"PGCOPY\n\xFF\r\n\0\0\0\0\0\0\0\0\0"
    }

    pub fn header<W: Write>(&self, w: &mut W) -> anyhow::Result<()> {
        match self {
            Self::Jsonl => Ok(()),
            Self::Pgcopy => Ok(w.write_all(Self::signature())?),
        }
    }
    pub fn footer<W: Write>(&self, w: &mut W) -> anyhow::Result<()> {
        match self {
            Self::Jsonl => Ok(()),
            Self::Pgcopy => Ok(w.write_u16::<BE>(TRAILER)?),
        }
    }

    pub fn write<W: Write>(&self, w: &mut W, record: &Record) -> anyhow::Result<()> {
        match self {
            Self::Jsonl => {
                serde_json::to_writer(&mut *w, record)?;
                w.write_all(b"\n")?;
            }
            Self::Pgcopy => {
                let hand = u64::from(Hand::from(record.counts())) as i64;
                w.write_u16::<BE>(N_FIELDS)?;
                w.write_u32::<BE>(size_of::<i64>() as u32)?;
                w.write_i64::<BE>(hand)?;
                w.write_u32::<BE>(size_of::<i16>() as u32)?;
                w.write_i16::<BE>(record.plays() as i16)?;
                match record.encoded() {
                    Some((a, b)) => {
                        w.write_u32::<BE>(size_of::<i32>() as u32)?;
                        w.write_i32::<BE>((a as i32) << 8 | b as i32)?;
                    }
                    None => w.write_i32::<BE>(NULL)?,
                }
            }
        }
        Ok(())
    }

    /// check whatever precedes the first row
    pub fn expect_header<R: BufRead>(&self, r: &mut R) -> anyhow::Result<()> {
        match self {
            Self::Jsonl => Ok(()),
            Self::Pgcopy => {
                let mut buffer = [0u8; 19];
                r.read_exact(&mut buffer)?;
                if &buffer[..] == Self::signature() {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("missing pgcopy signature"))
                }
            }
        }
    }

    /// next row, or None once the table ends
    pub fn read<R: BufRead>(&self, r: &mut R) -> anyhow::Result<Option<Record>> {
        match self {
            Self::Jsonl => {
                let mut line = String::new();
                loop {
                    line.clear();
                    if r.read_line(&mut line)? == 0 {
                        return Ok(None);
                    }
                    if !line.trim().is_empty() {
                        return Ok(Some(serde_json::from_str(line.trim())?));
                    }
                }
            }
            Self::Pgcopy => match r.read_u16::<BE>()? {
                TRAILER => Ok(None),
                N_FIELDS => {
                    Self::field(r, size_of::<i64>())?;
                    let hand = Hand::from(r.read_i64::<BE>()? as u64);
                    if !hand.is_valid() {
                        return Err(anyhow::anyhow!("bad packed hand {:?}", hand));
                    }
                    Self::field(r, size_of::<i16>())?;
                    let plays = r.read_i16::<BE>()?;
                    let witness = match r.read_i32::<BE>()? {
                        NULL => None,
                        4 => {
                            let m = r.read_i32::<BE>()?;
                            Some(((m >> 8) as u8, (m & 0xFF) as u8))
                        }
                        n => return Err(anyhow::anyhow!("bad move field length {}", n)),
                    };
                    let plays = u8::try_from(plays)?;
                    let counts = <[u8; N_RANKS]>::from(hand);
                    Ok(Some(Record::raw(counts, plays, witness)))
                }
                n => Err(anyhow::anyhow!("unexpected field count {}", n)),
            },
        }
    }

    fn field<R: BufRead>(r: &mut R, size: usize) -> anyhow::Result<()> {
        match r.read_u32::<BE>()? as usize {
            n if n == size => Ok(()),
            n => Err(anyhow::anyhow!("field length {} where {} expected", n, size)),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
