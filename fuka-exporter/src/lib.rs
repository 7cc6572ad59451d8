//! # fuka-exporter
//!
//! Tooling around FUKA binary initial data: the value types exchanged
//! with the native solver backend (binary descriptors, interpolation
//! grids, exported field arrays) and a small CLI for working with
//! level snapshot files.
//!
//! The numerical core (spectral interpolation, root finding) is a
//! native library and deliberately absent here; see [`solver::IdSolver`]
//! for the boundary it plugs into.

pub mod binary;
pub mod commands;
pub mod grid;
pub mod solver;

pub use binary::{BinaryInfo, BinaryType};
pub use grid::{Fields, Grid, GridError, InterpolationRequest};
pub use solver::{IdSolver, SolverError};
