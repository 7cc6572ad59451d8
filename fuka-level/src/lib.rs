//! # fuka-level
//!
//! Reader and writer for FUKA level snapshot files: a hybrid
//! text/binary format storing a named, ordered collection of
//! double-precision arrays.
//!
//! ## Format structure
//!
//! ```text
//! $BEGIN_variables:
//! $variable = alpha : length = 2
//! <16 bytes: little-endian f64 payload>
//! $variable = beta : length = 0
//! <0 bytes>
//! ```
//!
//! Every variable block is a header line, `length * 8` payload bytes,
//! and a single newline terminator. Variables are treated as opaque
//! named arrays; no units or grid semantics are attached.
//!
//! ## Quick start
//!
//! ```rust
//! use std::io::Cursor;
//! use fuka_level::{read_level, write_level, LevelFile};
//!
//! let mut level = LevelFile::new();
//! level.insert("alpha", vec![1.0, 2.5])?;
//! level.insert("beta", vec![])?;
//!
//! let mut buf = Vec::new();
//! write_level(&mut buf, &level)?;
//!
//! let back = read_level(&mut Cursor::new(&buf))?;
//! assert_eq!(back, level);
//! # Ok::<(), fuka_level::Error>(())
//! ```
//!
//! Files on disk go through [`read_level_file`] and
//! [`write_level_file`].

pub mod error;
pub mod header;
pub mod level;
pub mod reader;
pub mod writer;

pub use error::{Error, Result};
pub use header::VarHeader;
pub use level::{LevelFile, Variable};
pub use reader::{read_level, read_level_file, read_variable};
pub use writer::{write_level, write_level_file, write_variable};

/// First line of every level file, consumed on read and never
/// surfaced to callers.
pub const BEGIN_MARKER: &str = "$BEGIN_variables:\n";
