use nalgebra::{Matrix2, Matrix3, Vector2};

/// In-plane basis of a row-vector cell matrix.
///
/// Columns of the returned matrix are the xy parts of the first two lattice
/// vectors, so `basis * v` is the lattice point `v₁·a₁ + v₂·a₂`.
pub fn in_plane_basis(cell: &Matrix3<f64>) -> Matrix2<f64> {
    cell.fixed_view::<2, 2>(0, 0).transpose()
}

/// Lattice point reached by an integer combination of the basis columns.
pub fn basis_dot(basis: &Matrix2<f64>, v: &Vector2<i32>) -> Vector2<f64> {
    basis * v.map(|x| x as f64)
}

/// Counter-clockwise rotation matrix for `theta` in radians.
pub fn rotation_2d(theta: f64) -> Matrix2<f64> {
    let (sin, cos) = theta.sin_cos();
    Matrix2::new(cos, -sin, sin, cos)
}

/// Rotate a real 2-vector counter-clockwise by `theta` in radians.
pub fn rotate_2d(v: &Vector2<f64>, theta: f64) -> Vector2<f64> {
    rotation_2d(theta) * v
}

/// Euclidean distance between two real 2-vectors.
pub fn distance(u: &Vector2<f64>, v: &Vector2<f64>) -> f64 {
    (u - v).norm()
}
