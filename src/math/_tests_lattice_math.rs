#[cfg(test)]
mod tests_lattice_math {
    use crate::math::{basis_dot, distance, in_plane_basis, rotate_2d, rotation_2d};
    use approx::assert_relative_eq;
    use nalgebra::{Matrix2, Matrix3, Vector2};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_in_plane_basis_columns_are_lattice_vectors() {
        // Row-vector cell of an oblique layer
        let cell = Matrix3::new(1.0, 0.0, 0.0, 0.5, 0.8, 0.0, 0.0, 0.0, 10.0);
        let basis = in_plane_basis(&cell);

        let a1 = basis_dot(&basis, &Vector2::new(1, 0));
        let a2 = basis_dot(&basis, &Vector2::new(0, 1));
        assert_relative_eq!(a1.x, 1.0);
        assert_relative_eq!(a1.y, 0.0);
        assert_relative_eq!(a2.x, 0.5);
        assert_relative_eq!(a2.y, 0.8);
    }

    #[test]
    fn test_basis_dot_integer_combination() {
        let basis = Matrix2::new(2.0, 0.0, 0.0, 3.0);
        let p = basis_dot(&basis, &Vector2::new(2, -1));
        assert_relative_eq!(p.x, 4.0);
        assert_relative_eq!(p.y, -3.0);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let v = Vector2::new(1.0, 0.0);
        let rotated = rotate_2d(&v, FRAC_PI_2);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_full_turn_is_identity() {
        let v = Vector2::new(0.3, -1.7);
        let rotated = rotate_2d(&v, 2.0 * PI);
        assert_relative_eq!(rotated.x, v.x, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, v.y, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_matrix_is_orthogonal() {
        let r = rotation_2d(0.37);
        let product = r * r.transpose();
        assert_relative_eq!(product[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(product[(1, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(product[(0, 1)], 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance() {
        let u = Vector2::new(1.0, 2.0);
        let v = Vector2::new(4.0, 6.0);
        assert_relative_eq!(distance(&u, &v), 5.0);
        assert_relative_eq!(distance(&u, &u), 0.0);
    }

    #[test]
    fn test_rotation_preserves_distance() {
        let u = Vector2::new(1.2, -0.4);
        let v = Vector2::new(-2.0, 0.9);
        let theta = 1.1;
        assert_relative_eq!(
            distance(&rotate_2d(&u, theta), &rotate_2d(&v, theta)),
            distance(&u, &v),
            epsilon = 1e-12
        );
    }
}
