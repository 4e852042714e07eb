use log::info;

use crate::heterostructure::builder::InterfaceBuilder;
use crate::heterostructure::interface::Interface;
use crate::Result;

/// Tolerance and index windows visited by the lowest-stress sweep.
#[derive(Debug, Clone)]
pub struct SweepWindows {
    /// Coincidence tolerances in Å, typically tightest first.
    pub tolerances: Vec<f64>,
    /// `(n_min, n_max)` windows of the integer grid search.
    pub index_windows: Vec<(i32, i32)>,
}

impl Default for SweepWindows {
    fn default() -> Self {
        SweepWindows {
            tolerances: vec![0.01, 0.05, 0.1, 0.2],
            index_windows: vec![(0, 5), (0, 10), (0, 15)],
        }
    }
}

/// Run the interface search over every (tolerance, index window) combination
/// and return the candidate with the smallest in-plane stress.
///
/// The `builder` acts as a parameter template; its tolerance and index range
/// are overridden per window. Returns `None` when no window yields an
/// interface.
pub fn find_lowest_stress_interface(
    builder: &InterfaceBuilder,
    windows: &SweepWindows,
) -> Result<Option<Interface>> {
    let mut best: Option<Interface> = None;

    for &tolerance in &windows.tolerances {
        for &(n_min, n_max) in &windows.index_windows {
            let interfaces = builder
                .clone()
                .with_index_range(n_min, n_max)
                .with_tolerance(tolerance)
                .run()?;

            for interface in interfaces {
                let stress = interface.stress();
                if best.as_ref().map_or(true, |b| stress < b.stress()) {
                    info!(
                        "new best candidate: stress {:.5}, angle {:.3}°, {} atoms",
                        stress,
                        interface.angle(),
                        interface.atom_count()
                    );
                    best = Some(interface);
                }
            }
        }
    }

    Ok(best)
}
