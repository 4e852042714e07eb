// Math module: lattice primitives and exact integer utilities
// This module provides the small numeric kernel of the coincidence search

// ======================== MODULE DECLARATIONS ========================
pub mod integer_math;
pub mod lattice_math;

mod _tests_lattice_math;

// ======================== LATTICE PRIMITIVES ========================
pub use lattice_math::{
    basis_dot,      // fn(basis: &Matrix2<f64>, v: &Vector2<i32>) -> Vector2<f64> - integer combination of basis columns
    distance,       // fn(u: &Vector2<f64>, v: &Vector2<f64>) -> f64 - Euclidean norm of u - v
    in_plane_basis, // fn(cell: &Matrix3<f64>) -> Matrix2<f64> - in-plane basis of a row-vector cell, columns are vectors
    rotate_2d,      // fn(v: &Vector2<f64>, theta: f64) -> Vector2<f64> - counter-clockwise rotation by theta (rad)
    rotation_2d,    // fn(theta: f64) -> Matrix2<f64> - counter-clockwise rotation matrix
};

// ======================== INTEGER UTILITIES ========================
pub use integer_math::{
    det2,        // fn(m: &Matrix2<i32>) -> i64 - exact 2x2 determinant
    det3,        // fn(m: &Matrix3<i32>) -> i64 - exact 3x3 determinant
    gcd_of_list, // fn(values: &[i64]) -> i64 - GCD of absolute values, 0 when all inputs are 0
};
