#[cfg(test)]
mod tests_transformations {
    use crate::atoms::{make_supercell, rotate_atoms_around_z, stack_atoms, Atoms};
    use crate::error::BuilderError;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Vector3};
    use std::f64::consts::FRAC_PI_3;

    fn square_layer(a: f64) -> Atoms {
        Atoms::layer(
            Matrix3::new(a, 0.0, 0.0, 0.0, a, 0.0, 0.0, 0.0, 15.0),
            vec![Vector3::zeros()],
            vec!["C".to_string()],
        )
        .unwrap()
    }

    fn two_atom_layer() -> Atoms {
        Atoms::layer(
            Matrix3::new(2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 15.0),
            vec![Vector3::zeros(), Vector3::new(1.0, 1.0, 0.2)],
            vec!["B".to_string(), "N".to_string()],
        )
        .unwrap()
    }

    // ==================== Supercell Tests ====================

    #[test]
    fn test_make_supercell_diagonal_count() {
        let atoms = square_layer(1.0);
        let m3 = Matrix3::new(2, 0, 0, 0, 3, 0, 0, 0, 1);
        let supercell = make_supercell(&atoms, &m3).unwrap();

        // det = 6 copies of the single input atom
        assert_eq!(supercell.len(), 6);
        assert_relative_eq!(supercell.cell()[(0, 0)], 2.0);
        assert_relative_eq!(supercell.cell()[(1, 1)], 3.0);
        assert!(supercell.species().iter().all(|s| s == "C"));
    }

    #[test]
    fn test_make_supercell_count_scales_with_basis() {
        let atoms = two_atom_layer();
        let m3 = Matrix3::new(3, 0, 0, 0, 3, 0, 0, 0, 1);
        let supercell = make_supercell(&atoms, &m3).unwrap();
        assert_eq!(supercell.len(), 9 * atoms.len());
    }

    #[test]
    fn test_make_supercell_off_diagonal() {
        // Sheared supercell matrix with det = 2
        let atoms = square_layer(1.0);
        let m3 = Matrix3::new(1, 1, 0, -1, 1, 0, 0, 0, 1);
        let supercell = make_supercell(&atoms, &m3).unwrap();
        assert_eq!(supercell.len(), 2);
    }

    #[test]
    fn test_make_supercell_rejects_non_positive_determinant() {
        let atoms = square_layer(1.0);
        let singular = Matrix3::new(1, 0, 0, 2, 0, 0, 0, 0, 1);
        assert!(matches!(
            make_supercell(&atoms, &singular),
            Err(BuilderError::DegenerateCell(_))
        ));

        let inverted = Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, 1);
        assert!(matches!(
            make_supercell(&atoms, &inverted),
            Err(BuilderError::DegenerateCell(_))
        ));
    }

    #[test]
    fn test_make_supercell_atoms_inside_new_cell() {
        let atoms = two_atom_layer();
        let m3 = Matrix3::new(2, 1, 0, 0, 2, 0, 0, 0, 1);
        let supercell = make_supercell(&atoms, &m3).unwrap();
        assert_eq!(supercell.len(), 4 * atoms.len());

        let to_fractional = supercell.cell().transpose().try_inverse().unwrap();
        for position in supercell.positions() {
            let fractional = to_fractional * position;
            for component in fractional.iter() {
                assert!(
                    (-1e-6..1.0).contains(component),
                    "fractional coordinate {component} escapes the supercell"
                );
            }
        }
    }

    // ==================== Rotation Tests ====================

    #[test]
    fn test_rotation_is_isometry() {
        let atoms = two_atom_layer();
        let rotated = rotate_atoms_around_z(&atoms, FRAC_PI_3);

        for i in 0..atoms.len() {
            for j in (i + 1)..atoms.len() {
                let original = (atoms.positions()[i] - atoms.positions()[j]).norm();
                let image = (rotated.positions()[i] - rotated.positions()[j]).norm();
                assert_relative_eq!(original, image, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_rotation_keeps_z_axis_fixed() {
        let atoms = two_atom_layer();
        let rotated = rotate_atoms_around_z(&atoms, 0.7);

        // The out-of-plane vector and every z coordinate are untouched
        assert_relative_eq!(rotated.cell()[(2, 2)], atoms.cell()[(2, 2)]);
        assert_relative_eq!(rotated.cell()[(2, 0)], 0.0);
        assert_relative_eq!(rotated.cell()[(2, 1)], 0.0);
        for (p, q) in atoms.positions().iter().zip(rotated.positions()) {
            assert_relative_eq!(p.z, q.z);
        }
    }

    #[test]
    fn test_rotation_rotates_cell_rows() {
        let atoms = square_layer(2.0);
        let rotated = rotate_atoms_around_z(&atoms, std::f64::consts::FRAC_PI_2);
        // a1 = (2, 0) becomes (0, 2)
        assert_relative_eq!(rotated.cell()[(0, 0)], 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.cell()[(0, 1)], 2.0, epsilon = 1e-12);
    }

    // ==================== Stacking Tests ====================

    #[test]
    fn test_stack_atoms_counts_and_cell() {
        let bottom = square_layer(1.0);
        let top = square_layer(1.0);
        let stack = stack_atoms(&bottom, &top, 0.5, 4.0).unwrap();

        assert_eq!(stack.len(), bottom.len() + top.len());
        assert_eq!(stack.pbc(), [true, true, false]);
        // Identical layers blend back into the same in-plane cell
        assert_relative_eq!(stack.cell()[(0, 0)], 1.0);
        assert_relative_eq!(stack.cell()[(1, 1)], 1.0);
        assert_relative_eq!(stack.cell()[(0, 1)], 0.0);

        // The two atoms are separated by the interlayer distance
        let z_gap = stack.positions()[1].z - stack.positions()[0].z;
        assert!(z_gap >= 4.0 - 1e-12, "interlayer gap {z_gap} below distance");
    }

    #[test]
    fn test_stack_atoms_weight_blend() {
        let bottom = square_layer(1.0);
        let top = square_layer(2.0);

        let bottom_heavy = stack_atoms(&bottom, &top, 0.0, 4.0).unwrap();
        assert_relative_eq!(bottom_heavy.cell()[(0, 0)], 1.0);

        let top_heavy = stack_atoms(&bottom, &top, 1.0, 4.0).unwrap();
        assert_relative_eq!(top_heavy.cell()[(0, 0)], 2.0);

        let blended = stack_atoms(&bottom, &top, 0.5, 4.0).unwrap();
        assert_relative_eq!(blended.cell()[(0, 0)], 1.5);
    }

    #[test]
    fn test_stack_atoms_gap_measured_from_extremal_atoms() {
        let bottom = Atoms::layer(
            Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 20.0),
            vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.5, 0.5, 1.5)],
            vec!["Mo".to_string(), "S".to_string()],
        )
        .unwrap();
        let top = Atoms::layer(
            Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 20.0),
            vec![Vector3::new(0.0, 0.0, -0.3)],
            vec!["C".to_string()],
        )
        .unwrap();

        let stack = stack_atoms(&bottom, &top, 0.5, 3.0).unwrap();
        let top_atom_z = stack.positions()[2].z;
        assert_relative_eq!(top_atom_z, 1.5 + 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stack_atoms_rejects_singular_layer() {
        let bottom = square_layer(1.0);
        let degenerate = Atoms::layer(
            Matrix3::new(1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 15.0),
            vec![Vector3::zeros()],
            vec!["C".to_string()],
        )
        .unwrap();
        assert!(matches!(
            stack_atoms(&bottom, &degenerate, 0.5, 4.0),
            Err(BuilderError::IncompatibleLayers(_))
        ));
    }

    #[test]
    fn test_stack_atoms_rejects_pbc_mismatch() {
        let bottom = square_layer(1.0);
        let bulk = Atoms::new(
            Matrix3::identity(),
            vec![Vector3::zeros()],
            vec!["C".to_string()],
            [true, true, true],
        )
        .unwrap();
        assert!(matches!(
            stack_atoms(&bottom, &bulk, 0.5, 4.0),
            Err(BuilderError::IncompatibleLayers(_))
        ));
    }
}
