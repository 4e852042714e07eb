use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::info;

use hetero_lattice::heterostructure::{
    find_lowest_stress_interface, InterfaceBuilder, SweepWindows,
};
use hetero_lattice::io::{read_poscar, write_poscar};
use hetero_lattice::prelude::Atoms;

#[derive(Parser)]
#[command(name = "hetero-lattice")]
#[command(about = "A coincidence-lattice heterostructure builder for 2D bilayers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Number of threads to use (default: all available cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

#[derive(Args)]
struct SearchOptions {
    /// Bottom layer structure file (POSCAR)
    bottom: PathBuf,

    /// Top layer structure file (POSCAR)
    top: PathBuf,

    /// Maximum supercell index of the grid search
    #[arg(short = 'N', long, default_value_t = 10)]
    n_max: i32,

    /// Minimum supercell index of the grid search
    #[arg(long, default_value_t = 0)]
    n_min: i32,

    /// Angle sweep step size in degrees
    #[arg(short = 's', long, default_value_t = 1.0)]
    angle_stepsize: f64,

    /// Angle sweep limits in degrees (inclusive)
    #[arg(short = 'l', long, num_args = 2, default_values_t = [0.0, 90.0])]
    angle_limits: Vec<f64>,

    /// Explicit angle in degrees (repeatable; overrides the sweep)
    #[arg(short = 'a', long = "angle")]
    angles: Vec<f64>,

    /// Coincidence tolerance in Å
    #[arg(short, long, default_value_t = 0.1)]
    tolerance: f64,

    /// Cell blend weight between the two layers, in [0, 1]
    #[arg(short, long, default_value_t = 0.5)]
    weight: f64,

    /// Interlayer distance in Å
    #[arg(short, long, default_value_t = 4.0)]
    distance: f64,

    /// Skip idealization during standardization
    #[arg(long)]
    no_idealize: bool,

    /// Symmetry search precision
    #[arg(long, default_value_t = 1e-5)]
    symprec: f64,

    /// Symmetry angle tolerance in degrees
    #[arg(long, default_value_t = 5.0)]
    angle_tolerance: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate coincidence interfaces between two layers
    Build {
        #[command(flatten)]
        options: SearchOptions,

        /// Directory to write the interface structures to
        #[arg(short, long)]
        outdir: Option<PathBuf>,
    },
    /// Find the lowest-stress interface over tolerance and index windows
    Match {
        #[command(flatten)]
        options: SearchOptions,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .map_err(|e| anyhow::anyhow!("failed to set thread pool size: {e}"))?;
            info!("Using {threads} threads");
        }
        #[cfg(not(feature = "parallel"))]
        {
            log::warn!("Thread count specified but parallel feature not enabled. Ignoring.");
        }
    }

    info!("Starting hetero-lattice v{}", hetero_lattice::VERSION);

    match cli.command {
        Commands::Build { options, outdir } => run_build(options, outdir),
        Commands::Match { options } => run_match(options),
    }
}

fn load_layers(options: &SearchOptions) -> Result<(Atoms, Atoms)> {
    let bottom = read_poscar(&options.bottom)?;
    let top = read_poscar(&options.top)?;
    info!(
        "Loaded {} bottom atoms and {} top atoms",
        bottom.len(),
        top.len()
    );
    Ok((bottom, top))
}

fn builder_from(bottom: Atoms, top: Atoms, options: &SearchOptions) -> InterfaceBuilder {
    InterfaceBuilder::new(bottom, top)
        .with_index_range(options.n_min, options.n_max)
        .with_angle_sweep(
            (options.angle_limits[0], options.angle_limits[1]),
            options.angle_stepsize,
        )
        .with_angles(options.angles.clone())
        .with_tolerance(options.tolerance)
        .with_weight(options.weight)
        .with_distance(options.distance)
        .with_no_idealize(options.no_idealize)
        .with_symprec(options.symprec)
        .with_angle_tolerance(options.angle_tolerance)
}

fn run_build(options: SearchOptions, outdir: Option<PathBuf>) -> Result<()> {
    let (bottom, top) = load_layers(&options)?;
    let interfaces = builder_from(bottom, top, &options).run()?;

    if interfaces.is_empty() {
        println!("No coincidence interfaces found.");
        return Ok(());
    }

    println!(
        "{:>4}  {:>10}  {:>12}  {:>7}  {:>12}",
        "#", "angle (°)", "space group", "atoms", "area (Å²)"
    );
    for (index, interface) in interfaces.iter().enumerate() {
        println!(
            "{:>4}  {:>10.3}  {:>12}  {:>7}  {:>12.4}",
            index,
            interface.angle(),
            interface.space_group(),
            interface.atom_count(),
            interface.area()
        );
    }

    if let Some(outdir) = outdir {
        fs::create_dir_all(&outdir)
            .with_context(|| format!("failed to create {}", outdir.display()))?;
        for (index, interface) in interfaces.iter().enumerate() {
            let path = outdir.join(format!("interface_{index:03}.vasp"));
            write_poscar(interface.stack(), &path)?;
        }
        println!(
            "Wrote {} structures to {}",
            interfaces.len(),
            outdir.display()
        );
    }

    Ok(())
}

fn run_match(options: SearchOptions) -> Result<()> {
    let (bottom, top) = load_layers(&options)?;
    let builder = builder_from(bottom, top, &options);

    match find_lowest_stress_interface(&builder, &SweepWindows::default())? {
        Some(best) => {
            println!("Lowest-stress interface:");
            println!("  stress       {:.6}", best.stress());
            println!("  angle        {:.3}°", best.angle());
            println!("  space group  {}", best.space_group());
            println!("  atoms        {}", best.atom_count());
            println!("  area         {:.4} Å²", best.area());
        }
        None => println!("No interface matched within the sweep windows."),
    }

    Ok(())
}
