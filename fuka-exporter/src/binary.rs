//! Compact binary system descriptors

use std::fmt;

/// Kind of compact binary an initial-data set describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryType {
    /// Neutron star + neutron star
    Bns,
    /// Black hole + black hole
    Bbh,
    /// Black hole + neutron star
    Bhns,
}

impl fmt::Display for BinaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bns => "bns",
            Self::Bbh => "bbh",
            Self::Bhns => "bhns",
        };
        write!(f, "{name}")
    }
}

/// Component masses and x-positions of a binary, as reported by the
/// solver backend from a `.info` file. This crate never parses the
/// file itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryInfo {
    pub mass1: f64,
    pub mass2: f64,
    pub position_x1: f64,
    pub position_x2: f64,
}
