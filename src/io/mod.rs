// IO module: structure file input/output for the command-line layer
// The core library consumes only the Atoms model; everything here exists so
// that the binary can load layers from disk and write results back

// ======================== MODULE DECLARATIONS ========================
pub mod poscar;

// Test modules
mod _tests_poscar;

// ======================== POSCAR FORMAT ========================
pub use poscar::{
    format_poscar, // fn(&Atoms) -> String - render an Atoms value as POSCAR text
    parse_poscar,  // fn(&str) -> anyhow::Result<Atoms> - parse POSCAR text
    read_poscar,   // fn(&Path) -> anyhow::Result<Atoms> - load a POSCAR file
    write_poscar,  // fn(&Atoms, &Path) -> anyhow::Result<()> - write a POSCAR file
};
