#[cfg(test)]
mod tests_poscar {
    use crate::io::{format_poscar, parse_poscar};
    use approx::assert_relative_eq;

    const GRAPHENE: &str = "\
graphene
1.0
  2.46  0.0   0.0
 -1.23  2.13  0.0
  0.0   0.0   15.0
C
2
Direct
0.0      0.0      0.0
0.33333  0.66667  0.0
";

    #[test]
    fn test_parse_direct_coordinates() {
        let atoms = parse_poscar(GRAPHENE).unwrap();

        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms.species(), ["C".to_string(), "C".to_string()]);
        assert_eq!(atoms.pbc(), [true, true, false]);
        assert_relative_eq!(atoms.cell()[(0, 0)], 2.46);
        assert_relative_eq!(atoms.cell()[(2, 2)], 15.0);

        // Second atom: 1/3 a1 + 2/3 a2
        let expected_x = 0.33333 * 2.46 + 0.66667 * (-1.23);
        let expected_y = 0.66667 * 2.13;
        assert_relative_eq!(atoms.positions()[1].x, expected_x, epsilon = 1e-10);
        assert_relative_eq!(atoms.positions()[1].y, expected_y, epsilon = 1e-10);
    }

    #[test]
    fn test_parse_cartesian_with_scale() {
        let text = "\
scaled square
2.0
1.0 0.0 0.0
0.0 1.0 0.0
0.0 0.0 7.5
Si
1
Cartesian
0.25 0.25 0.0
";
        let atoms = parse_poscar(text).unwrap();
        assert_relative_eq!(atoms.cell()[(0, 0)], 2.0);
        assert_relative_eq!(atoms.cell()[(2, 2)], 15.0);
        assert_relative_eq!(atoms.positions()[0].x, 0.5);
        assert_relative_eq!(atoms.positions()[0].y, 0.5);
    }

    #[test]
    fn test_parse_multiple_species() {
        let text = "\
hexagonal BN
1.0
  2.5   0.0   0.0
 -1.25  2.17  0.0
  0.0   0.0   15.0
B N
1 1
Direct
0.0     0.0     0.0
0.33333 0.66667 0.0
";
        let atoms = parse_poscar(text).unwrap();
        assert_eq!(atoms.species(), ["B".to_string(), "N".to_string()]);
    }

    #[test]
    fn test_parse_rejects_missing_symbol_line() {
        let text = "\
old VASP 4 file
1.0
1.0 0.0 0.0
0.0 1.0 0.0
0.0 0.0 10.0
2
Direct
0.0 0.0 0.0
0.5 0.5 0.0
";
        assert!(parse_poscar(text).is_err());
    }

    #[test]
    fn test_parse_rejects_truncated_positions() {
        let text = "\
truncated
1.0
1.0 0.0 0.0
0.0 1.0 0.0
0.0 0.0 10.0
C
2
Direct
0.0 0.0 0.0
";
        assert!(parse_poscar(text).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let atoms = parse_poscar(GRAPHENE).unwrap();
        let rendered = format_poscar(&atoms);
        let reparsed = parse_poscar(&rendered).unwrap();

        assert_eq!(reparsed.len(), atoms.len());
        assert_eq!(reparsed.species(), atoms.species());
        for row in 0..3 {
            for col in 0..3 {
                assert_relative_eq!(
                    reparsed.cell()[(row, col)],
                    atoms.cell()[(row, col)],
                    epsilon = 1e-10
                );
            }
        }
        for (p, q) in atoms.positions().iter().zip(reparsed.positions()) {
            assert_relative_eq!((p - q).norm(), 0.0, epsilon = 1e-10);
        }
    }
}
