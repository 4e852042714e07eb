use nalgebra::{Matrix2, Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::BuilderError;
use crate::math;

/// A finite collection of atoms with a periodic cell.
///
/// The cell is stored row-wise: row i is lattice vector aᵢ. For 2D layers
/// the third vector points along z and `pbc` is `(true, true, false)`.
/// Values are logically immutable: every transformation returns a new
/// collection, and the parallel positions/species sequences always have
/// equal length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atoms {
    cell: Matrix3<f64>,
    positions: Vec<Vector3<f64>>,
    species: Vec<String>,
    pbc: [bool; 3],
}

impl Atoms {
    /// Validated constructor.
    pub fn new(
        cell: Matrix3<f64>,
        positions: Vec<Vector3<f64>>,
        species: Vec<String>,
        pbc: [bool; 3],
    ) -> Result<Self, BuilderError> {
        if positions.len() != species.len() {
            return Err(BuilderError::InvalidParameter(format!(
                "positions ({}) and species ({}) must have equal length",
                positions.len(),
                species.len()
            )));
        }
        Ok(Self {
            cell,
            positions,
            species,
            pbc,
        })
    }

    /// 2D layer constructor with the conventional `(true, true, false)` pbc.
    pub fn layer(
        cell: Matrix3<f64>,
        positions: Vec<Vector3<f64>>,
        species: Vec<String>,
    ) -> Result<Self, BuilderError> {
        Self::new(cell, positions, species, [true, true, false])
    }

    // Internal constructor for transformations that preserve the invariants.
    pub(crate) fn from_parts(
        cell: Matrix3<f64>,
        positions: Vec<Vector3<f64>>,
        species: Vec<String>,
        pbc: [bool; 3],
    ) -> Self {
        debug_assert_eq!(positions.len(), species.len());
        Self {
            cell,
            positions,
            species,
            pbc,
        }
    }

    pub fn cell(&self) -> &Matrix3<f64> {
        &self.cell
    }

    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn pbc(&self) -> [bool; 3] {
        self.pbc
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// In-plane 2×2 basis; columns are the xy parts of the first two lattice
    /// vectors.
    pub fn in_plane_basis(&self) -> Matrix2<f64> {
        math::in_plane_basis(&self.cell)
    }

    /// Magnitude of the cross product of the two in-plane lattice vectors.
    pub fn in_plane_area(&self) -> f64 {
        self.in_plane_basis().determinant().abs()
    }

    /// Smallest z coordinate over all atoms, `None` when empty.
    pub fn lowest_z(&self) -> Option<f64> {
        self.positions.iter().map(|p| p.z).reduce(f64::min)
    }

    /// Largest z coordinate over all atoms, `None` when empty.
    pub fn highest_z(&self) -> Option<f64> {
        self.positions.iter().map(|p| p.z).reduce(f64::max)
    }
}
