use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pk_app::{AppError, AppResult, run_solution, run_sweep};

#[derive(Parser)]
#[command(name = "pk-cli")]
#[command(about = "pointkin CLI - point kinetics transient solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate input file syntax and parameter consistency
    Validate {
        /// Path to the input YAML file
        input_path: PathBuf,
    },
    /// Solve one transient and persist its artifacts
    Solve {
        /// Path to the input YAML file
        input_path: PathBuf,
        /// Results output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Solve the same transient across several timestep sizes
    Sweep {
        /// Path to the input YAML file
        input_path: PathBuf,
        /// Comma-separated dt values in seconds
        #[arg(long, value_delimiter = ',', required = true)]
        dts: Vec<f64>,
        /// Results output directory (one subdirectory per dt)
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input_path } => cmd_validate(&input_path),
        Commands::Solve {
            input_path,
            output_dir,
        } => cmd_solve(&input_path, &output_dir),
        Commands::Sweep {
            input_path,
            dts,
            output_dir,
        } => cmd_sweep(&input_path, &dts, &output_dir),
    }
}

fn load_input(input_path: &Path) -> AppResult<pk_project::Input> {
    pk_project::load_yaml(input_path).map_err(AppError::from)
}

fn cmd_validate(input_path: &Path) -> AppResult<()> {
    println!("Validating input: {}", input_path.display());
    let input = load_input(input_path)?;
    println!("✓ Input is valid");
    println!(
        "  {} delayed group(s), {} over {} s at dt = {} s",
        input.data.delay_fractions.len(),
        reactivity_label(&input.reactivity),
        input.time.total,
        input.time.dt,
    );
    Ok(())
}

fn cmd_solve(input_path: &Path, output_dir: &Path) -> AppResult<()> {
    let input = load_input(input_path)?;
    let summary = run_solution(&input, output_dir)?;
    println!(
        "✓ Solved {} steps ({} delayed group(s))",
        summary.num_steps, summary.num_groups
    );
    println!("  Final relative power: {:.6}", summary.final_power);
    println!("  Artifacts written to: {}", summary.output_dir.display());
    Ok(())
}

fn cmd_sweep(input_path: &Path, dts: &[f64], output_dir: &Path) -> AppResult<()> {
    let input = load_input(input_path)?;
    let points = run_sweep(&input, dts, output_dir)?;
    println!("✓ Sweep complete: {} point(s)", points.len());
    for point in &points {
        println!(
            "  dt = {:<8} steps = {:<6} final power = {:.6}",
            point.dt, point.num_steps, point.final_power
        );
    }
    println!("  Summary written to: {}", output_dir.display());
    Ok(())
}

fn reactivity_label(def: &pk_project::ReactivityDef) -> &'static str {
    match def {
        pk_project::ReactivityDef::Step { .. } => "step insertion",
        pk_project::ReactivityDef::Ramp { .. } => "ramp insertion",
        pk_project::ReactivityDef::Sine { .. } => "sine oscillation",
    }
}
