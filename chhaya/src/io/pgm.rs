//! Plain-text PGM (P2) export and import.
//!
//! Format:
//! ```text
//! P2
//! <width> <height>
//! 255
//! <value>        one per line, row-major, width × height lines
//! ```
//!
//! The reader accepts any whitespace layout and `#` comments, as allowed
//! by the netpbm spec, so files touched by other tools still load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::render::Raster;

/// Magic token for ASCII graymaps
const MAGIC: &str = "P2";

/// Error type for PGM I/O
#[derive(Error, Debug)]
pub enum PgmError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed file contents
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Save a raster to a PGM file
pub fn save_pgm(raster: &Raster, path: &Path) -> Result<(), PgmError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pgm(raster, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a raster in P2 format
pub fn write_pgm<W: Write>(raster: &Raster, writer: &mut W) -> Result<(), PgmError> {
    write!(
        writer,
        "{}\n{} {}\n{}\n",
        MAGIC,
        raster.width(),
        raster.height(),
        Raster::MAX_VALUE
    )?;
    for value in raster.as_slice() {
        writeln!(writer, "{}", value)?;
    }
    Ok(())
}

/// Load a raster from a PGM file
pub fn load_pgm(path: &Path) -> Result<Raster, PgmError> {
    let file = File::open(path)?;
    read_pgm(&mut BufReader::new(file))
}

/// Read a P2 raster
pub fn read_pgm<R: BufRead>(reader: &mut R) -> Result<Raster, PgmError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    let mut tokens = contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace);

    let magic = tokens
        .next()
        .ok_or_else(|| PgmError::InvalidFormat("empty file".into()))?;
    if magic != MAGIC {
        return Err(PgmError::InvalidFormat(format!(
            "expected magic {MAGIC}, found {magic}"
        )));
    }

    let width = parse_header(tokens.next(), "width")?;
    let height = parse_header(tokens.next(), "height")?;
    let max_value = parse_header(tokens.next(), "max value")?;
    if max_value != Raster::MAX_VALUE as usize {
        return Err(PgmError::InvalidFormat(format!(
            "unsupported max value {max_value}"
        )));
    }

    let expected = width
        .checked_mul(height)
        .ok_or_else(|| PgmError::InvalidFormat(format!("{width}x{height} too large")))?;
    let mut data = Vec::with_capacity(expected);
    for token in tokens {
        if data.len() == expected {
            return Err(PgmError::InvalidFormat(format!(
                "more than {expected} pixel values"
            )));
        }
        let value: u8 = token
            .parse()
            .map_err(|_| PgmError::InvalidFormat(format!("bad pixel value {token:?}")))?;
        data.push(value);
    }
    if data.len() != expected {
        return Err(PgmError::InvalidFormat(format!(
            "expected {expected} pixel values, found {}",
            data.len()
        )));
    }

    Raster::from_raw(width, height, data)
        .ok_or_else(|| PgmError::InvalidFormat("dimension mismatch".into()))
}

fn parse_header(token: Option<&str>, field: &str) -> Result<usize, PgmError> {
    let token = token.ok_or_else(|| PgmError::InvalidFormat(format!("missing {field}")))?;
    token
        .parse()
        .map_err(|_| PgmError::InvalidFormat(format!("bad {field} {token:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Raster {
        let mut r = Raster::new(3, 2);
        r.set(0, 0, 1);
        r.set(0, 2, 255);
        r.set(1, 1, 42);
        r
    }

    #[test]
    fn test_exact_layout() {
        let mut buf = Vec::new();
        write_pgm(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "P2\n3 2\n255\n1\n0\n255\n0\n42\n0\n");
    }

    #[test]
    fn test_read_back() {
        let mut buf = Vec::new();
        write_pgm(&sample(), &mut buf).unwrap();
        let parsed = read_pgm(&mut buf.as_slice()).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_read_with_comments_and_packed_values() {
        let text = "P2\n# written by hand\n3 2 # dims\n255\n1 0 255\n0 42 0\n";
        let parsed = read_pgm(&mut text.as_bytes()).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_rejects_malformed() {
        let cases = [
            "",
            "P5\n1 1\n255\n0\n",
            "P2\n2 1\n255\n0\n",
            "P2\n1 1\n255\n0\n0\n",
            "P2\n1 1\n65535\n0\n",
            "P2\n1 1\n255\n256\n",
            "P2\nx 1\n255\n0\n",
        ];
        for text in cases {
            let result = read_pgm(&mut text.as_bytes());
            assert!(
                matches!(result, Err(PgmError::InvalidFormat(_))),
                "accepted {text:?}"
            );
        }
    }
}
