#![deny(unsafe_code)]
//! CLI driver for the petri reaction-diffusion simulator.
//!
//! Subcommands:
//! - `run` — seed a grid, step it N frames, write a PNG
//! - `replay <spec.json>` — reproduce a run from a saved spec

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use log::debug;
use petri_core::RunSpec;
use petri_render::FrameBuffer;
use petri_sim::{Grid, Kernel};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "petri", about = "Gray-Scott reaction-diffusion simulator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed a grid, run it for N steps, and write a PNG snapshot.
    Run {
        /// Grid width in cells.
        #[arg(short = 'W', long, default_value_t = 100)]
        width: usize,

        /// Grid height in cells.
        #[arg(short = 'H', long, default_value_t = 100)]
        height: usize,

        /// Number of simulation steps (one update + one draw each).
        #[arg(short, long, default_value_t = 1000)]
        steps: usize,

        /// PRNG seed for deterministic random seeding.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Seeding mode ("random" or "center"; unknown names mean random).
        #[arg(short, long, default_value = "center")]
        mode: String,

        /// Per-cell probability for random seeding.
        #[arg(short, long, default_value_t = 0.2)]
        rate: f64,

        /// Simulation parameters as a JSON object string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Convolution kernel as a JSON 3x3 matrix string.
        #[arg(long)]
        kernel: Option<String>,

        /// Canvas width in pixels.
        #[arg(long, default_value_t = 500)]
        canvas_width: usize,

        /// Canvas height in pixels.
        #[arg(long, default_value_t = 500)]
        canvas_height: usize,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Also write the resolved run spec to this path for later replay.
        #[arg(long)]
        emit_spec: Option<PathBuf>,
    },
    /// Reproduce a run from a saved spec file.
    Replay {
        /// Path to a run spec JSON file.
        spec: PathBuf,

        /// Canvas width in pixels.
        #[arg(long, default_value_t = 500)]
        canvas_width: usize,

        /// Canvas height in pixels.
        #[arg(long, default_value_t = 500)]
        canvas_height: usize,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Run {
            width,
            height,
            steps,
            seed,
            mode,
            rate,
            params,
            kernel,
            canvas_width,
            canvas_height,
            output,
            emit_spec,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let kernel = kernel
                .map(|text| {
                    let v: serde_json::Value = serde_json::from_str(&text)
                        .map_err(|e| CliError::Input(format!("invalid --kernel JSON: {e}")))?;
                    Kernel::from_json(&v).map_err(CliError::from)
                })
                .transpose()?;

            let mut spec = RunSpec::new(width, height, steps, seed);
            spec.mode = mode;
            spec.rate = rate;
            spec.params = params;
            spec.kernel = kernel.map(|k| k.weights());

            execute(&spec, canvas_width, canvas_height, &output, cli.json)?;

            if let Some(path) = emit_spec {
                fs::write(&path, serde_json::to_string_pretty(&spec)?)
                    .map_err(|e| CliError::Io(e.to_string()))?;
            }
        }
        Command::Replay {
            spec,
            canvas_width,
            canvas_height,
            output,
        } => {
            let text = fs::read_to_string(&spec).map_err(|e| CliError::Io(e.to_string()))?;
            let spec: RunSpec = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid run spec: {e}")))?;
            execute(&spec, canvas_width, canvas_height, &output, cli.json)?;
        }
    }

    Ok(())
}

/// The fixed-step frame loop: one `update` then one `draw` per tick.
fn execute(
    spec: &RunSpec,
    canvas_width: usize,
    canvas_height: usize,
    output: &Path,
    json: bool,
) -> Result<(), CliError> {
    let mut grid = Grid::from_spec(spec)?;
    let mut frame = FrameBuffer::new(spec.width, spec.height, canvas_width, canvas_height)?;

    for _ in 0..spec.steps {
        grid.update();
        grid.draw(&mut frame);
    }
    if spec.steps == 0 {
        // Zero-step runs still snapshot the seeded state.
        grid.draw(&mut frame);
    }

    debug!("final grid state:\n{}", grid.dump());

    petri_render::snapshot::write_png(&frame, output)?;

    if json {
        let info = serde_json::json!({
            "width": spec.width,
            "height": spec.height,
            "steps": spec.steps,
            "seed": spec.seed,
            "mode": spec.mode,
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "simulated {}x{} grid for {} steps (mode {}, seed {}) -> {}",
            spec.width,
            spec.height,
            spec.steps,
            spec.mode,
            spec.seed,
            output.display()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
