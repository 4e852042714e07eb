//! Minimal VASP POSCAR reader and writer.
//!
//! Supports the post-VASP-5 layout: comment line, scaling factor, three
//! lattice vector rows, element symbol line, count line, and `Direct` or
//! `Cartesian` positions. Selective-dynamics blocks and negative (volume)
//! scaling factors are not supported.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::{Matrix3, Vector3};

use crate::atoms::Atoms;

/// Parse POSCAR text into a 2D layer with `(true, true, false)` pbc.
pub fn parse_poscar(text: &str) -> Result<Atoms> {
    let mut lines = text.lines();
    let mut next_line = || {
        lines
            .next()
            .context("unexpected end of POSCAR text")
            .map(str::trim)
    };

    let _comment = next_line()?;
    let scale: f64 = next_line()?
        .parse()
        .context("invalid scaling factor")?;
    if scale <= 0.0 {
        bail!("only positive scaling factors are supported, got {scale}");
    }

    let mut cell = Matrix3::zeros();
    for row in 0..3 {
        let vector = parse_three_floats(next_line()?)
            .with_context(|| format!("invalid lattice vector on row {}", row + 1))?;
        cell.set_row(row, &(scale * vector).transpose());
    }

    let symbols: Vec<String> = next_line()?
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if symbols.is_empty() || symbols[0].parse::<usize>().is_ok() {
        bail!("element symbol line is required (VASP 5 format)");
    }

    let counts: Vec<usize> = next_line()?
        .split_whitespace()
        .map(|token| token.parse().context("invalid species count"))
        .collect::<Result<_>>()?;
    if counts.len() != symbols.len() {
        bail!(
            "{} element symbols but {} counts",
            symbols.len(),
            counts.len()
        );
    }

    let mode = next_line()?;
    let cartesian = match mode.chars().next() {
        Some('C') | Some('c') | Some('K') | Some('k') => true,
        Some('D') | Some('d') => false,
        _ => bail!("unsupported coordinate mode line: {mode}"),
    };

    let mut positions = Vec::new();
    let mut species = Vec::new();
    for (symbol, &count) in symbols.iter().zip(&counts) {
        for _ in 0..count {
            let raw = parse_three_floats(next_line()?)
                .with_context(|| format!("invalid position for {symbol}"))?;
            let position = if cartesian {
                scale * raw
            } else {
                cell.transpose() * raw
            };
            positions.push(position);
            species.push(symbol.clone());
        }
    }

    Atoms::layer(cell, positions, species).map_err(Into::into)
}

/// Load a POSCAR file from disk.
pub fn read_poscar(path: &Path) -> Result<Atoms> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_poscar(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Render an Atoms value as POSCAR text with Cartesian positions.
pub fn format_poscar(atoms: &Atoms) -> String {
    let mut text = String::from("generated by hetero-lattice\n1.0\n");
    let cell = atoms.cell();
    for row in 0..3 {
        text.push_str(&format!(
            "  {:20.12}  {:20.12}  {:20.12}\n",
            cell[(row, 0)],
            cell[(row, 1)],
            cell[(row, 2)]
        ));
    }

    // Consecutive runs of equal symbols become one count entry.
    let mut runs: Vec<(String, usize)> = Vec::new();
    for symbol in atoms.species() {
        match runs.last_mut() {
            Some((last, count)) if last == symbol => *count += 1,
            _ => runs.push((symbol.clone(), 1)),
        }
    }
    let symbols: Vec<&str> = runs.iter().map(|(s, _)| s.as_str()).collect();
    let counts: Vec<String> = runs.iter().map(|(_, c)| c.to_string()).collect();
    text.push_str(&format!("  {}\n", symbols.join("  ")));
    text.push_str(&format!("  {}\n", counts.join("  ")));

    text.push_str("Cartesian\n");
    for position in atoms.positions() {
        text.push_str(&format!(
            "  {:20.12}  {:20.12}  {:20.12}\n",
            position.x, position.y, position.z
        ));
    }
    text
}

/// Write an Atoms value to disk as POSCAR.
pub fn write_poscar(atoms: &Atoms, path: &Path) -> Result<()> {
    fs::write(path, format_poscar(atoms))
        .with_context(|| format!("failed to write {}", path.display()))
}

fn parse_three_floats(line: &str) -> Result<Vector3<f64>> {
    let values: Vec<f64> = line
        .split_whitespace()
        .take(3)
        .map(|token| token.parse().context("invalid float"))
        .collect::<Result<_>>()?;
    if values.len() != 3 {
        bail!("expected three numbers, got {}", values.len());
    }
    Ok(Vector3::new(values[0], values[1], values[2]))
}
