use super::consts::*;
use crate::fields::{parse_decimal, parse_hex, pickup};
use crate::{PlaneInfo, TypeInfo};
use log::{debug, error, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A record stored as one fixed-width line per entry.
pub trait FixedWidthRecord: Sized {
    /// Used in log messages.
    const NAME: &'static str;
    /// Lines shorter than this, newline included, hold no record.
    const MIN_LINE_LENGTH: usize;

    fn decode_line(line: &[u8]) -> Self;
}

impl FixedWidthRecord for TypeInfo {
    const NAME: &'static str = "aircraft type";
    const MIN_LINE_LENGTH: usize = TYPE_MIN_LINE_LENGTH;

    fn decode_line(line: &[u8]) -> Self {
        let seats = parse_decimal(line, TYPE_SEATS_OFFSET);

        TypeInfo {
            id: parse_decimal(line, TYPE_ID_OFFSET),
            manufacturer: pickup(line, TYPE_MANUFACTURER),
            model: pickup(line, TYPE_MODEL),
            category_code: parse_decimal(line, TYPE_CATEGORY_OFFSET),
            seats: u32::try_from(seats).unwrap_or(u32::MAX),
        }
    }
}

impl FixedWidthRecord for PlaneInfo {
    const NAME: &'static str = "registration";
    const MIN_LINE_LENGTH: usize = PLANE_MIN_LINE_LENGTH;

    fn decode_line(line: &[u8]) -> Self {
        PlaneInfo {
            id: parse_hex(line, PLANE_ID_OFFSET),
            n_number: pickup(line, PLANE_N_NUMBER),
            model: parse_decimal(line, PLANE_MODEL_OFFSET),
            registrant: pickup(line, PLANE_REGISTRANT),
        }
    }
}

pub fn read_types<R: BufRead>(reader: R) -> Result<Vec<TypeInfo>, LoadError> {
    Reader::new(reader).read_records()
}

pub fn read_planes<R: BufRead>(reader: R) -> Result<Vec<PlaneInfo>, LoadError> {
    Reader::new(reader).read_records()
}

/// Reads an `ACFTREF.txt` file.
pub fn read_types_file(path: impl AsRef<Path>) -> Result<Vec<TypeInfo>, LoadError> {
    read_file(path.as_ref())
}

/// Reads a `MASTER.txt` file.
pub fn read_planes_file(path: impl AsRef<Path>) -> Result<Vec<PlaneInfo>, LoadError> {
    read_file(path.as_ref())
}

fn read_file<T: FixedWidthRecord>(path: &Path) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| {
        error!("cannot open file '{}': {}", path.display(), source);
        LoadError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!("Reading {} records from {}", T::NAME, path.display());
    Reader::new(BufReader::new(file)).read_records()
}

/// Splits its input into lines of at most `MAX_LINE_LENGTH` bytes.
///
/// A longer line is handed out in consecutive chunks, each of which is
/// treated as a line of its own.
pub struct Reader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Reader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: inner,
            buf: Vec::with_capacity(MAX_LINE_LENGTH),
        }
    }

    pub fn read_records<T: FixedWidthRecord>(&mut self) -> Result<Vec<T>, LoadError> {
        let mut records = Vec::new();
        let mut skipped = 0;

        while let Some(line) = self.next_line()? {
            if line.len() < T::MIN_LINE_LENGTH {
                trace!("Skipping {} line of {} bytes", T::NAME, line.len());
                skipped += 1;
                continue;
            }

            records.push(T::decode_line(line));
        }

        debug!(
            "Decoded {} {} records, skipped {} short lines",
            records.len(),
            T::NAME,
            skipped
        );
        Ok(records)
    }

    fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        let read = (&mut self.reader)
            .take(MAX_LINE_LENGTH as u64)
            .read_until(b'\n', &mut self.buf)?;

        Ok((read > 0).then_some(self.buf.as_slice()))
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
