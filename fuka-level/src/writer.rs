//! Sequential level file writing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use tracing::debug;

use crate::BEGIN_MARKER;
use crate::error::Result;
use crate::header::VarHeader;
use crate::level::{LevelFile, Variable};

/// Write a complete level file to a stream.
///
/// Emits the begin marker, then every variable in insertion order.
/// Each payload is followed by a newline, so the next header always
/// starts at a line boundary.
///
/// # Examples
///
/// ```
/// use fuka_level::{write_level, LevelFile};
///
/// let mut level = LevelFile::new();
/// level.insert("alpha", vec![1.0, 2.5])?;
///
/// let mut buf = Vec::new();
/// write_level(&mut buf, &level)?;
/// assert!(buf.starts_with(b"$BEGIN_variables:\n"));
/// # Ok::<(), fuka_level::Error>(())
/// ```
pub fn write_level<W: Write>(writer: &mut W, level: &LevelFile) -> Result<()> {
    writer.write_all(BEGIN_MARKER.as_bytes())?;

    for variable in level {
        write_variable(writer, variable)?;
    }

    Ok(())
}

/// Write one variable block: header line, little-endian payload,
/// newline terminator.
pub fn write_variable<W: Write>(writer: &mut W, variable: &Variable) -> Result<()> {
    let header = VarHeader::new(variable.name.as_str(), variable.values.len());
    writer.write_all(header.to_line().as_bytes())?;

    for value in &variable.values {
        writer.write_f64::<LittleEndian>(*value)?;
    }
    writer.write_all(b"\n")?;

    Ok(())
}

/// Write a level file to disk, creating or truncating `path`.
///
/// The destination is opened before any buffering is set up, so an
/// open failure returns immediately without touching anything else.
/// A write failure mid-stream leaves a partial file behind; there is
/// no atomic replace.
pub fn write_level_file<P: AsRef<Path>>(path: P, level: &LevelFile) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;

    let mut writer = BufWriter::new(file);
    write_level(&mut writer, level)?;
    writer.flush()?;

    debug!(path = %path.display(), variables = level.len(), "wrote level file");

    Ok(())
}
