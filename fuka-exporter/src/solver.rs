//! Boundary contract with the native initial-data solver
//!
//! Interpolation, root-finding, and spectral evaluation all live in a
//! native library outside this repository. This module only fixes the
//! shape of the exchange: requests are borrowed immutably, results
//! come back as freshly allocated arrays.

use std::path::Path;

use thiserror::Error;

use crate::binary::{BinaryInfo, BinaryType};
use crate::grid::{Fields, InterpolationRequest};

/// Solver boundary errors
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("unknown binary type for this solver: {0}")]
    UnsupportedBinaryType(BinaryType),

    #[error("solver backend failure: {0}")]
    Backend(String),
}

/// An initial-data solver backend.
///
/// Implementations wrap whatever native machinery evaluates the
/// initial data; callers only see owned [`Fields`] sized to the
/// request's grid.
pub trait IdSolver {
    /// Extract component masses and x-positions for the binary
    /// described by a `.info` file.
    fn binary_info(
        &self,
        binary_type: BinaryType,
        info_path: &Path,
    ) -> Result<BinaryInfo, SolverError>;

    /// Interpolate all exported fields onto the request's grid.
    fn interpolate(&self, request: &InterpolationRequest) -> Result<Fields, SolverError>;
}
