//! Variable header line parsing and formatting
//!
//! Each variable in a level file is introduced by a single text line:
//!
//! ```text
//! $variable = alpha : length = 1024
//! ```

use crate::error::{Error, Result};

/// Parsed form of one variable header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarHeader {
    /// Variable name.
    ///
    /// Must not contain the delimiter substrings `" = "` or `" : "`;
    /// this is a caller precondition, not checked when formatting.
    pub name: String,
    /// Number of f64 values in the payload that follows.
    pub count: usize,
}

impl VarHeader {
    /// Create a header for a variable with `count` values.
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// Parse a header line, with or without its trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuka_level::VarHeader;
    ///
    /// let header = VarHeader::parse("$variable = alpha : length = 2\n")?;
    /// assert_eq!(header.name, "alpha");
    /// assert_eq!(header.count, 2);
    /// # Ok::<(), fuka_level::Error>(())
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);

        let malformed = || Error::MalformedHeader {
            line: line.to_string(),
        };

        let (name_kv, length_kv) = line.split_once(" : ").ok_or_else(malformed)?;
        if length_kv.contains(" : ") {
            return Err(malformed());
        }

        let name = split_kv(name_kv).ok_or_else(malformed)?;
        let length = split_kv(length_kv).ok_or_else(malformed)?;

        let count = length.parse::<usize>().map_err(|_| Error::InvalidLength {
            value: length.to_string(),
        })?;

        Ok(Self {
            name: name.to_string(),
            count,
        })
    }

    /// Format the header back into its on-disk line, newline included.
    pub fn to_line(&self) -> String {
        format!("$variable = {} : length = {}\n", self.name, self.count)
    }
}

/// Split a `key = value` fragment, requiring exactly one `" = "` delimiter.
fn split_kv(fragment: &str) -> Option<&str> {
    let (_, value) = fragment.split_once(" = ")?;
    if value.contains(" = ") {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_header() {
        let header = VarHeader::parse("$variable = alpha : length = 1024\n").unwrap();
        assert_eq!(header.name, "alpha");
        assert_eq!(header.count, 1024);
    }

    #[test]
    fn parse_without_newline() {
        let header = VarHeader::parse("$variable = beta_x : length = 0").unwrap();
        assert_eq!(header.name, "beta_x");
        assert_eq!(header.count, 0);
    }

    #[test]
    fn format_round_trips() {
        let header = VarHeader::new("gamma_xy", 16);
        assert_eq!(header.to_line(), "$variable = gamma_xy : length = 16\n");
        assert_eq!(VarHeader::parse(&header.to_line()).unwrap(), header);
    }

    #[test]
    fn missing_colon_delimiter_is_malformed() {
        let err = VarHeader::parse("$variable = alpha length = 2").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { .. }), "{err:?}");
    }

    #[test]
    fn extra_colon_delimiter_is_malformed() {
        let err = VarHeader::parse("$variable = a : length = 2 : extra = 3").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { .. }), "{err:?}");
    }

    #[test]
    fn missing_equals_is_malformed() {
        let err = VarHeader::parse("$variable alpha : length = 2").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { .. }), "{err:?}");

        let err = VarHeader::parse("$variable = alpha : length 2").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { .. }), "{err:?}");
    }

    #[test]
    fn non_numeric_length_is_invalid() {
        let err = VarHeader::parse("$variable = alpha : length = many").unwrap_err();
        assert!(
            matches!(err, Error::InvalidLength { ref value } if value == "many"),
            "{err:?}"
        );
    }

    #[test]
    fn negative_length_is_invalid() {
        let err = VarHeader::parse("$variable = alpha : length = -1").unwrap_err();
        assert!(matches!(err, Error::InvalidLength { .. }), "{err:?}");
    }
}
