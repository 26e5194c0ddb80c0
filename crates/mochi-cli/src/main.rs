//! Mochi CLI: simulation, benchmarking, and input validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mochi")]
#[command(version, about = "Mochi — real-time shape-matching deformable body solver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print a summary.
    Simulate {
        /// Path to a solver config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Wavefront OBJ file to simulate. A procedural lattice is used
        /// when omitted.
        #[arg(short, long)]
        mesh: Option<String>,

        /// Number of timesteps to run.
        #[arg(short, long, default_value_t = 200)]
        frames: u32,

        /// Write final vertex positions as JSON to this path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run the benchmark suite.
    Benchmark {
        /// Which scenario to run (cube_drop, dense_lattice, shell_bounce, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a config or mesh file.
    Validate {
        /// Path to a .toml config or .obj mesh.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            mesh,
            frames,
            output,
        } => commands::simulate(config.as_deref(), mesh.as_deref(), frames, output.as_deref()),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
