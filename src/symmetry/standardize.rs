use std::collections::HashMap;

use log::debug;
use moyo::base::{AngleTolerance, Cell, Lattice};
use moyo::data::Setting;
use moyo::MoyoDataset;

use crate::atoms::Atoms;

/// Standardize `atoms` and return the international space-group number.
///
/// Returns 0 when the symmetry search fails; the atoms are left untouched in
/// that case. When `no_idealize` is unset, the collection is replaced by the
/// idealized standardized cell (the primitive one if `to_primitive` is set).
/// The engine is pure Rust and reentrant, so this is safe to call from
/// parallel workers.
pub fn standardize_atoms(
    atoms: &mut Atoms,
    to_primitive: bool,
    no_idealize: bool,
    symprec: f64,
    angle_tolerance: f64,
) -> i32 {
    let Some(to_fractional) = atoms.cell().transpose().try_inverse() else {
        debug!("standardization skipped: singular cell");
        return 0;
    };

    // Species labels become consecutive integer kinds, first-seen order.
    let mut kinds: HashMap<String, i32> = HashMap::new();
    let mut labels: Vec<String> = Vec::new();
    let mut numbers = Vec::with_capacity(atoms.len());
    for symbol in atoms.species() {
        let kind = *kinds.entry(symbol.clone()).or_insert_with(|| {
            labels.push(symbol.clone());
            labels.len() as i32 - 1
        });
        numbers.push(kind);
    }

    let positions = atoms.positions().iter().map(|p| to_fractional * p).collect();
    let cell = Cell::new(Lattice::new(*atoms.cell()), positions, numbers);

    let dataset = match MoyoDataset::new(
        &cell,
        symprec,
        AngleTolerance::Radian(angle_tolerance.to_radians()),
        Setting::Spglib,
    ) {
        Ok(dataset) => dataset,
        Err(error) => {
            debug!("standardization failed: {error}");
            return 0;
        }
    };

    if !no_idealize {
        let standardized = if to_primitive {
            &dataset.prim_std_cell
        } else {
            &dataset.std_cell
        };
        let basis = standardized.lattice.basis;
        let positions = standardized
            .positions
            .iter()
            .map(|f| basis.transpose() * f)
            .collect();
        let species = standardized
            .numbers
            .iter()
            .map(|&kind| labels[kind as usize].clone())
            .collect();
        let pbc = atoms.pbc();
        *atoms = Atoms::from_parts(basis, positions, species, pbc);
    }

    dataset.number
}
