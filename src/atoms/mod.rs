// Atoms module: atomic layer model and rigid geometric transformations
// This module provides the immutable atom collection consumed by the
// coincidence pipeline and the operations that build stacked interfaces

// ======================== MODULE DECLARATIONS ========================
pub mod atom_collection;
pub mod transformations;

mod _tests_transformations;

// ======================== ATOMIC LAYER MODEL ========================
pub use atom_collection::Atoms; // struct - periodic cell + Cartesian positions + species + pbc flags

// Atoms impl methods:
//   new(cell, positions, species, pbc) -> Result<Self>     - validated constructor
//   layer(cell, positions, species) -> Result<Self>        - 2D layer with (true, true, false) pbc
//   cell(&self) -> &Matrix3<f64>                           - row-vector cell matrix
//   positions(&self) -> &[Vector3<f64>]                    - Cartesian positions
//   species(&self) -> &[String]                            - chemical symbols, parallel to positions
//   pbc(&self) -> [bool; 3]                                - periodic boundary flags
//   len(&self) -> usize                                    - atom count
//   in_plane_basis(&self) -> Matrix2<f64>                  - 2x2 basis, columns are in-plane vectors
//   in_plane_area(&self) -> f64                            - cross-product magnitude of the in-plane vectors
//   lowest_z(&self) / highest_z(&self) -> Option<f64>      - extremal z coordinates

// ======================== RIGID TRANSFORMATIONS ========================
pub use transformations::{
    make_supercell,        // fn(&Atoms, &Matrix3<i32>) -> Result<Atoms> - integer supercell expansion
    rotate_atoms_around_z, // fn(&Atoms, theta_rad: f64) -> Atoms - rigid rotation of cell and positions
    stack_atoms,           // fn(bottom: &Atoms, top: &Atoms, weight: f64, distance: f64) -> Result<Atoms>
};
