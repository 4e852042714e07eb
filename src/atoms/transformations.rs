use log::warn;
use nalgebra::{Matrix3, Vector3};

use crate::atoms::Atoms;
use crate::config::{BASIS_SINGULAR_TOLERANCE, FRACTIONAL_BOUNDARY_EPSILON};
use crate::error::BuilderError;
use crate::math::{det3, rotation_2d};
use crate::Result;

/// Expand `atoms` by an integer supercell matrix.
///
/// The new cell is `m3 · cell`. Candidate translations cover the bounding
/// box of the unit cube image under `m3ᵀ`; a translated atom is kept when
/// its fractional coordinates in the new cell fall inside `[0, 1)` up to
/// the boundary epsilon, which yields exactly `det m3` copies of every
/// input atom.
pub fn make_supercell(atoms: &Atoms, m3: &Matrix3<i32>) -> Result<Atoms> {
    let det = det3(m3);
    if det <= 0 {
        return Err(BuilderError::DegenerateCell(format!(
            "supercell matrix must have positive determinant, got {det}"
        )));
    }

    let new_cell = m3.map(|x| x as f64) * atoms.cell();
    let to_fractional = new_cell.transpose().try_inverse().ok_or_else(|| {
        BuilderError::DegenerateCell("supercell basis is singular".to_string())
    })?;

    // Conservative translation ranges along each axis, from the corners of
    // the unit cube image under m3ᵀ.
    let mut lower = [0i32; 3];
    let mut upper = [0i32; 3];
    for axis in 0..3 {
        for row in 0..3 {
            let entry = m3[(row, axis)];
            lower[axis] += entry.min(0);
            upper[axis] += entry.max(0);
        }
    }

    let old_cell = atoms.cell();
    let lattice_vectors = [
        old_cell.row(0).transpose(),
        old_cell.row(1).transpose(),
        old_cell.row(2).transpose(),
    ];

    let mut positions = Vec::with_capacity(det as usize * atoms.len());
    let mut species = Vec::with_capacity(det as usize * atoms.len());
    for i in lower[0]..=upper[0] {
        for j in lower[1]..=upper[1] {
            for k in lower[2]..=upper[2] {
                let translation = i as f64 * lattice_vectors[0]
                    + j as f64 * lattice_vectors[1]
                    + k as f64 * lattice_vectors[2];
                for (position, symbol) in atoms.positions().iter().zip(atoms.species()) {
                    let candidate = position + translation;
                    let fractional = to_fractional * candidate;
                    let inside = fractional.iter().all(|&f| {
                        f >= -FRACTIONAL_BOUNDARY_EPSILON && f < 1.0 - FRACTIONAL_BOUNDARY_EPSILON
                    });
                    if inside {
                        positions.push(candidate);
                        species.push(symbol.clone());
                    }
                }
            }
        }
    }

    let expected = det as usize * atoms.len();
    if positions.len() != expected {
        warn!(
            "supercell filling produced {} atoms, expected {expected}",
            positions.len()
        );
    }

    Ok(Atoms::from_parts(new_cell, positions, species, atoms.pbc()))
}

/// Rigidly rotate cell and positions counter-clockwise about the z-axis.
pub fn rotate_atoms_around_z(atoms: &Atoms, theta: f64) -> Atoms {
    let mut rotation = Matrix3::identity();
    rotation
        .fixed_view_mut::<2, 2>(0, 0)
        .copy_from(&rotation_2d(theta));

    // Rows hold the lattice vectors, so the cell picks up the transpose.
    let cell = atoms.cell() * rotation.transpose();
    let positions = atoms.positions().iter().map(|p| rotation * p).collect();

    Atoms::from_parts(cell, positions, atoms.species().to_vec(), atoms.pbc())
}

/// Stack `top` onto `bottom` with an interlayer gap of `distance` along z.
///
/// The stacked in-plane cell is the blend `A + weight · (B − A)`; the
/// out-of-plane vector is the bottom layer's. The top layer is lifted so
/// that its lowest atom sits `distance` above the bottom layer's highest
/// atom.
pub fn stack_atoms(bottom: &Atoms, top: &Atoms, weight: f64, distance: f64) -> Result<Atoms> {
    if bottom.pbc() != top.pbc() {
        return Err(BuilderError::IncompatibleLayers(format!(
            "periodic boundary flags differ: {:?} vs {:?}",
            bottom.pbc(),
            top.pbc()
        )));
    }

    let a = bottom.in_plane_basis();
    let b = top.in_plane_basis();
    if a.determinant().abs() < BASIS_SINGULAR_TOLERANCE
        || b.determinant().abs() < BASIS_SINGULAR_TOLERANCE
    {
        return Err(BuilderError::IncompatibleLayers(
            "in-plane cell of a layer is singular".to_string(),
        ));
    }

    // Columns of the blend are the stacked in-plane lattice vectors.
    let blended = a + (b - a) * weight;
    let bottom_cell = bottom.cell();
    let cell = Matrix3::new(
        blended[(0, 0)],
        blended[(1, 0)],
        0.0,
        blended[(0, 1)],
        blended[(1, 1)],
        0.0,
        bottom_cell[(2, 0)],
        bottom_cell[(2, 1)],
        bottom_cell[(2, 2)],
    );

    let bottom_ceiling = bottom.highest_z().unwrap_or(0.0);
    let top_floor = top.lowest_z().unwrap_or(0.0);
    let shift = bottom_ceiling - top_floor + distance;

    let mut positions = bottom.positions().to_vec();
    positions.extend(
        top.positions()
            .iter()
            .map(|p| Vector3::new(p.x, p.y, p.z + shift)),
    );
    let mut species = bottom.species().to_vec();
    species.extend_from_slice(top.species());

    Ok(Atoms::from_parts(
        cell,
        positions,
        species,
        [true, true, false],
    ))
}
