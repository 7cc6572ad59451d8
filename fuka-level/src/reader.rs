//! Sequential level file reading
//!
//! A level file is a begin-marker line followed by zero or more
//! variable blocks. Each block is a header line, `count * 8` bytes of
//! little-endian f64 payload, and a single newline terminator. The
//! reader stops at a clean end of stream between blocks; an end of
//! stream anywhere inside a block is an error.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::{debug, trace, warn};

use crate::BEGIN_MARKER;
use crate::error::{Error, Result};
use crate::header::VarHeader;
use crate::level::{LevelFile, Variable};

/// Read a complete level file from a buffered stream.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use fuka_level::read_level;
///
/// let mut data = Vec::new();
/// data.extend_from_slice(b"$BEGIN_variables:\n");
/// data.extend_from_slice(b"$variable = alpha : length = 1\n");
/// data.extend_from_slice(&1.5f64.to_le_bytes());
/// data.push(b'\n');
///
/// let level = read_level(&mut Cursor::new(&data))?;
/// assert_eq!(level.get("alpha"), Some(&[1.5][..]));
/// # Ok::<(), fuka_level::Error>(())
/// ```
pub fn read_level<R: BufRead>(reader: &mut R) -> Result<LevelFile> {
    let mut marker = String::new();
    let n = reader.read_line(&mut marker)?;
    if n == 0 {
        return Err(Error::MissingBeginMarker);
    }
    if marker != BEGIN_MARKER {
        warn!(line = %marker.trim_end(), "unexpected begin marker line");
    }

    let mut level = LevelFile::new();
    while let Some(variable) = read_variable(reader)? {
        level.insert(variable.name, variable.values)?;
    }

    Ok(level)
}

/// Read one variable block.
///
/// Returns `Ok(None)` on a clean end of stream before any byte of the
/// block was read; this is the normal terminator position between two
/// blocks. Every other shortfall is an error.
pub fn read_variable<R: BufRead>(reader: &mut R) -> Result<Option<Variable>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    if !line.ends_with('\n') {
        return Err(Error::Io(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "variable header line cut short",
        )));
    }

    let header = VarHeader::parse(&line)?;
    trace!(name = %header.name, count = header.count, "reading variable");

    let payload = read_payload(reader, &header)?;
    let mut values = vec![0f64; header.count];
    payload.as_slice().read_f64_into::<LittleEndian>(&mut values)?;

    consume_terminator(reader, &header)?;

    Ok(Some(Variable {
        name: header.name,
        values,
    }))
}

/// Read exactly the declared payload bytes, tracking how far we got.
///
/// The buffer grows with the stream rather than being sized up front,
/// so a header declaring an absurd length fails with a truncation
/// error once the stream runs dry instead of attempting the full
/// allocation.
fn read_payload<R: BufRead>(reader: &mut R, header: &VarHeader) -> Result<Vec<u8>> {
    let expected = header
        .count
        .checked_mul(8)
        .ok_or_else(|| Error::InvalidLength {
            value: header.count.to_string(),
        })?;

    let mut payload = Vec::new();
    reader.take(expected as u64).read_to_end(&mut payload)?;

    if payload.len() < expected {
        return Err(Error::TruncatedPayload {
            name: header.name.clone(),
            expected,
            actual: payload.len(),
        });
    }

    Ok(payload)
}

/// Consume the single newline that terminates a variable block.
fn consume_terminator<R: BufRead>(reader: &mut R, header: &VarHeader) -> Result<()> {
    let mut terminator = [0u8; 1];
    match reader.read_exact(&mut terminator) {
        Ok(()) if terminator[0] == b'\n' => Ok(()),
        Ok(()) => Err(Error::MissingTerminator {
            name: header.name.clone(),
        }),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(Error::MissingTerminator {
            name: header.name.clone(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Read a level file from disk.
pub fn read_level_file<P: AsRef<Path>>(path: P) -> Result<LevelFile> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let level = read_level(&mut reader)?;
    debug!(path = %path.display(), variables = level.len(), "read level file");

    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn block(name: &str, values: &[f64]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(VarHeader::new(name, values.len()).to_line().as_bytes());
        for v in values {
            data.extend_from_slice(&v.to_le_bytes());
        }
        data.push(b'\n');
        data
    }

    #[test]
    fn read_two_variables_in_order() {
        let mut data = BEGIN_MARKER.as_bytes().to_vec();
        data.extend(block("alpha", &[1.0, 2.5]));
        data.extend(block("beta", &[]));

        let level = read_level(&mut Cursor::new(&data)).unwrap();
        assert_eq!(level.names(), vec!["alpha", "beta"]);
        assert_eq!(level.get("alpha"), Some(&[1.0, 2.5][..]));
        assert_eq!(level.get("beta"), Some(&[][..]));
    }

    #[test]
    fn empty_stream_is_missing_begin_marker() {
        let err = read_level(&mut Cursor::new(b"")).unwrap_err();
        assert!(matches!(err, Error::MissingBeginMarker), "{err:?}");
    }

    #[test]
    fn marker_alone_reads_empty_level() {
        let level = read_level(&mut Cursor::new(BEGIN_MARKER.as_bytes())).unwrap();
        assert!(level.is_empty());
    }

    #[test]
    fn truncated_payload_is_fatal() {
        let mut data = BEGIN_MARKER.as_bytes().to_vec();
        data.extend_from_slice(b"$variable = alpha : length = 4\n");
        data.extend_from_slice(&1.0f64.to_le_bytes()); // 8 of 32 bytes

        let err = read_level(&mut Cursor::new(&data)).unwrap_err();
        assert!(
            matches!(
                err,
                Error::TruncatedPayload {
                    ref name,
                    expected: 32,
                    actual: 8,
                } if name == "alpha"
            ),
            "{err:?}"
        );
    }

    #[test]
    fn missing_payload_terminator_is_fatal() {
        let mut data = BEGIN_MARKER.as_bytes().to_vec();
        data.extend_from_slice(b"$variable = alpha : length = 1\n");
        data.extend_from_slice(&1.0f64.to_le_bytes());
        // no trailing newline

        let err = read_level(&mut Cursor::new(&data)).unwrap_err();
        assert!(
            matches!(err, Error::MissingTerminator { ref name } if name == "alpha"),
            "{err:?}"
        );
    }

    #[test]
    fn malformed_header_is_fatal() {
        let mut data = BEGIN_MARKER.as_bytes().to_vec();
        data.extend_from_slice(b"$variable alpha length 2\n");

        let err = read_level(&mut Cursor::new(&data)).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { .. }), "{err:?}");
    }

    #[test]
    fn non_numeric_length_is_fatal() {
        let mut data = BEGIN_MARKER.as_bytes().to_vec();
        data.extend_from_slice(b"$variable = alpha : length = two\n");

        let err = read_level(&mut Cursor::new(&data)).unwrap_err();
        assert!(matches!(err, Error::InvalidLength { .. }), "{err:?}");
    }

    #[test]
    fn overflowing_declared_length_is_invalid() {
        // count * 8 would overflow usize; must be an error, not a panic
        let mut data = BEGIN_MARKER.as_bytes().to_vec();
        data.extend_from_slice(b"$variable = alpha : length = 2305843009213693952\n");

        let err = read_level(&mut Cursor::new(&data)).unwrap_err();
        assert!(
            matches!(err, Error::InvalidLength { ref value } if value == "2305843009213693952"),
            "{err:?}"
        );
    }

    #[test]
    fn huge_declared_length_with_short_stream_is_truncated() {
        // Large but non-overflowing declaration over a near-empty
        // stream must fail on the missing bytes, not allocate 8 MB
        // of zeroes up front
        let mut data = BEGIN_MARKER.as_bytes().to_vec();
        data.extend_from_slice(b"$variable = alpha : length = 1000000\n");
        data.extend_from_slice(&1.0f64.to_le_bytes());

        let err = read_level(&mut Cursor::new(&data)).unwrap_err();
        assert!(
            matches!(
                err,
                Error::TruncatedPayload {
                    ref name,
                    expected: 8_000_000,
                    actual: 8,
                } if name == "alpha"
            ),
            "{err:?}"
        );
    }

    #[test]
    fn partial_header_line_is_fatal() {
        let mut data = BEGIN_MARKER.as_bytes().to_vec();
        data.extend_from_slice(b"$variable = alpha : len"); // cut mid-line

        let err = read_level(&mut Cursor::new(&data)).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "{err:?}");
    }

    #[test]
    fn duplicate_name_in_stream_is_rejected() {
        let mut data = BEGIN_MARKER.as_bytes().to_vec();
        data.extend(block("alpha", &[1.0]));
        data.extend(block("alpha", &[2.0]));

        let err = read_level(&mut Cursor::new(&data)).unwrap_err();
        assert!(
            matches!(err, Error::DuplicateVariable { ref name } if name == "alpha"),
            "{err:?}"
        );
    }

    #[test]
    fn payload_bytes_survive_exactly() {
        // Bit patterns that must not be altered in transit
        let values = [0.0, -0.0, f64::INFINITY, f64::MIN_POSITIVE, 1.0e300];
        let mut data = BEGIN_MARKER.as_bytes().to_vec();
        data.extend(block("exact", &values));

        let level = read_level(&mut Cursor::new(&data)).unwrap();
        let read = level.get("exact").unwrap();
        for (a, b) in values.iter().zip(read) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
