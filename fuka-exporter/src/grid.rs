//! Interpolation grids and the field arrays a solver returns

use fuka_level::LevelFile;
use thiserror::Error;

use crate::binary::BinaryType;

/// Grid construction errors
#[derive(Error, Debug)]
pub enum GridError {
    #[error("coordinate arrays differ in length: x={x}, y={y}, z={z}")]
    MismatchedLengths { x: usize, y: usize, z: usize },
}

/// A set of Cartesian sample points, one coordinate array per axis.
///
/// All three arrays have the same length; the constructor enforces
/// this so a point count is always well defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Grid {
    /// Build a grid from three equal-length coordinate arrays.
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self, GridError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(GridError::MismatchedLengths {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        Ok(Self { x, y, z })
    }

    /// Number of sample points.
    pub fn n_points(&self) -> usize {
        self.x.len()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }
}

/// Everything needed for one interpolation call against the solver
/// backend. The grid is borrowed immutably by the solver; results come
/// back as freshly allocated [`Fields`].
#[derive(Debug, Clone)]
pub struct InterpolationRequest {
    pub binary_type: BinaryType,
    pub info_filename: String,
    pub grid: Grid,
    pub interpolation_offset: f64,
    pub interpolation_order: u32,
    pub relative_dr_spacing: f64,
}

/// Field arrays interpolated onto a grid, one value per sample point.
///
/// Spacetime components are always filled; the hydro block
/// (`rho` .. `v_z`) stays zero for vacuum binaries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    pub alpha: Vec<f64>,
    pub beta_x: Vec<f64>,
    pub beta_y: Vec<f64>,
    pub beta_z: Vec<f64>,
    pub gamma_xx: Vec<f64>,
    pub gamma_xy: Vec<f64>,
    pub gamma_xz: Vec<f64>,
    pub gamma_yy: Vec<f64>,
    pub gamma_yz: Vec<f64>,
    pub gamma_zz: Vec<f64>,
    pub k_xx: Vec<f64>,
    pub k_xy: Vec<f64>,
    pub k_xz: Vec<f64>,
    pub k_yy: Vec<f64>,
    pub k_yz: Vec<f64>,
    pub k_zz: Vec<f64>,
    pub rho: Vec<f64>,
    pub epsilon: Vec<f64>,
    pub pressure: Vec<f64>,
    pub v_x: Vec<f64>,
    pub v_y: Vec<f64>,
    pub v_z: Vec<f64>,
}

impl Fields {
    /// Allocate all field arrays at `n_points`, zero-filled.
    pub fn zeroed(n_points: usize) -> Self {
        Self {
            alpha: vec![0.0; n_points],
            beta_x: vec![0.0; n_points],
            beta_y: vec![0.0; n_points],
            beta_z: vec![0.0; n_points],
            gamma_xx: vec![0.0; n_points],
            gamma_xy: vec![0.0; n_points],
            gamma_xz: vec![0.0; n_points],
            gamma_yy: vec![0.0; n_points],
            gamma_yz: vec![0.0; n_points],
            gamma_zz: vec![0.0; n_points],
            k_xx: vec![0.0; n_points],
            k_xy: vec![0.0; n_points],
            k_xz: vec![0.0; n_points],
            k_yy: vec![0.0; n_points],
            k_yz: vec![0.0; n_points],
            k_zz: vec![0.0; n_points],
            rho: vec![0.0; n_points],
            epsilon: vec![0.0; n_points],
            pressure: vec![0.0; n_points],
            v_x: vec![0.0; n_points],
            v_y: vec![0.0; n_points],
            v_z: vec![0.0; n_points],
        }
    }

    /// Number of sample points, taken from the lapse array.
    pub fn n_points(&self) -> usize {
        self.alpha.len()
    }

    /// Persist the fields as a level snapshot, one variable per field,
    /// in the fixed export order.
    pub fn into_level(self) -> fuka_level::Result<LevelFile> {
        let mut level = LevelFile::new();
        level.insert("alpha", self.alpha)?;
        level.insert("beta_x", self.beta_x)?;
        level.insert("beta_y", self.beta_y)?;
        level.insert("beta_z", self.beta_z)?;
        level.insert("gamma_xx", self.gamma_xx)?;
        level.insert("gamma_xy", self.gamma_xy)?;
        level.insert("gamma_xz", self.gamma_xz)?;
        level.insert("gamma_yy", self.gamma_yy)?;
        level.insert("gamma_yz", self.gamma_yz)?;
        level.insert("gamma_zz", self.gamma_zz)?;
        level.insert("K_xx", self.k_xx)?;
        level.insert("K_xy", self.k_xy)?;
        level.insert("K_xz", self.k_xz)?;
        level.insert("K_yy", self.k_yy)?;
        level.insert("K_yz", self.k_yz)?;
        level.insert("K_zz", self.k_zz)?;
        level.insert("rho", self.rho)?;
        level.insert("epsilon", self.epsilon)?;
        level.insert("pressure", self.pressure)?;
        level.insert("v_x", self.v_x)?;
        level.insert("v_y", self.v_y)?;
        level.insert("v_z", self.v_z)?;
        Ok(level)
    }
}
