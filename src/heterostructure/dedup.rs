use std::collections::HashSet;

use crate::config::AREA_EPSILON;
use crate::heterostructure::interface::Interface;

// Space group and atom count compare exactly; the area is quantized so that
// floating-point noise below the epsilon cannot split a class.
fn equivalence_key(interface: &Interface) -> (i32, usize, i64) {
    (
        interface.space_group(),
        interface.atom_count(),
        (interface.area() / AREA_EPSILON).round() as i64,
    )
}

/// Keep one representative per (space group, atom count, area) class.
///
/// Candidates are ranked by `(space_group, atom_count, area, angle)` before
/// filtering, so the retained representative and the output order do not
/// depend on the order in which the interfaces were produced. Applying the
/// filter twice yields the same list as applying it once.
pub fn filter_unique_interfaces(mut interfaces: Vec<Interface>) -> Vec<Interface> {
    interfaces.sort_by(|lhs, rhs| {
        (lhs.space_group(), lhs.atom_count())
            .cmp(&(rhs.space_group(), rhs.atom_count()))
            .then(lhs.area().total_cmp(&rhs.area()))
            .then(lhs.angle().total_cmp(&rhs.angle()))
    });

    let mut seen = HashSet::new();
    interfaces.retain(|interface| seen.insert(equivalence_key(interface)));
    interfaces
}
