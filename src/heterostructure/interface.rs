use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::atoms::Atoms;

/// A stacked heterostructure candidate.
///
/// Immutable once admitted to a result set. `angle` is in degrees; `m` and
/// `n` are the supercell matrices of the two layers lifted to 3×3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interface {
    bottom: Atoms,
    top: Atoms,
    stack: Atoms,
    angle: f64,
    m: Matrix3<i32>,
    n: Matrix3<i32>,
    space_group: i32,
}

impl Interface {
    pub(crate) fn new(
        bottom: Atoms,
        top: Atoms,
        stack: Atoms,
        angle: f64,
        m: Matrix3<i32>,
        n: Matrix3<i32>,
        space_group: i32,
    ) -> Self {
        Self {
            bottom,
            top,
            stack,
            angle,
            m,
            n,
            space_group,
        }
    }

    /// The bottom layer supercell.
    pub fn bottom(&self) -> &Atoms {
        &self.bottom
    }

    /// The rotated top layer supercell.
    pub fn top(&self) -> &Atoms {
        &self.top
    }

    /// The stacked (and possibly standardized) interface cell.
    pub fn stack(&self) -> &Atoms {
        &self.stack
    }

    /// Rotation angle of the top layer in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The two integer supercell matrices, bottom first.
    pub fn supercell_matrices(&self) -> (&Matrix3<i32>, &Matrix3<i32>) {
        (&self.m, &self.n)
    }

    /// International space-group number of the stacked cell.
    pub fn space_group(&self) -> i32 {
        self.space_group
    }

    /// In-plane area of the stacked cell (Å²).
    pub fn area(&self) -> f64 {
        self.stack.in_plane_area()
    }

    /// Number of atoms in the stacked cell.
    pub fn atom_count(&self) -> usize {
        self.stack.len()
    }

    /// Relative in-plane mismatch between the two supercell bases.
    ///
    /// At a perfect coincidence the rotated top supercell basis equals the
    /// bottom one and the stress vanishes.
    pub fn stress(&self) -> f64 {
        let a = self.bottom.in_plane_basis();
        let b = self.top.in_plane_basis();
        (b - a).norm() / a.norm()
    }
}
