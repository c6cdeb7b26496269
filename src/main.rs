//! valnoise CLI - sample value noise lines and grids.
//!
//! Builds seeded octave stacks, composes them into fractal noise and
//! prints the samples to stdout: one value per line for 1D, one row of
//! space-separated values per line for 2D.

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::io::{BufWriter, Write};
use std::time::Instant;

use valnoise::fractal::{fractalise, fractalise_2d, AmplitudeDecay, FractalConfig, SizeGrowth};
use valnoise::remap::Remap;

/// Seeded value noise sampler.
#[derive(Parser)]
#[command(name = "valnoise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print fractal 1D noise samples, one per line.
    Line {
        /// Number of samples; every octave spans one period over them.
        #[arg(short = 'n', long, default_value = "200")]
        samples: usize,

        /// Scroll offset in whole samples.
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i64,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of octaves.
        #[arg(long, default_value = "8")]
        octaves: u8,

        /// Vertices in the first octave; octave i has base * (i + 1).
        #[arg(long, default_value = "16")]
        base_size: usize,

        /// Ease curve applied between vertices.
        #[arg(short, long, default_value = "quintic")]
        remap: RemapArg,

        /// Octave amplitude decay.
        #[arg(short, long, default_value = "halving")]
        decay: DecayArg,

        /// Persistence for `--decay persistence`.
        #[arg(long, default_value = "0.5")]
        persistence: f32,
    },

    /// Print a fractal 2D noise grid, one row per line.
    Grid {
        /// Grid width in cells.
        #[arg(long, default_value = "256")]
        width: u32,

        /// Grid height in cells.
        #[arg(long, default_value = "256")]
        height: u32,

        /// Horizontal offset in cells.
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset_x: i64,

        /// Vertical offset in cells.
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset_y: i64,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of octaves.
        #[arg(long, default_value = "6")]
        octaves: u8,

        /// Resolution of the first octave (power of two); doubles per octave.
        #[arg(long, default_value = "8")]
        base_resolution: usize,

        /// Ease curve applied between vertices.
        #[arg(short, long, default_value = "smoothstep")]
        remap: RemapArg,

        /// Octave amplitude decay.
        #[arg(short, long, default_value = "halving")]
        decay: DecayArg,

        /// Persistence for `--decay persistence`.
        #[arg(long, default_value = "0.5")]
        persistence: f32,
    },

    /// Print the amplitude of each octave for a decay policy.
    Info {
        /// Number of octaves.
        #[arg(long, default_value = "8")]
        octaves: u8,

        /// Octave amplitude decay.
        #[arg(short, long, default_value = "halving")]
        decay: DecayArg,

        /// Persistence for `--decay persistence`.
        #[arg(long, default_value = "0.5")]
        persistence: f32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RemapArg {
    /// Linear interpolation.
    Identity,
    /// Half-period cosine.
    Cosine,
    /// Cubic smoothstep.
    Smoothstep,
    /// Quintic (Perlin) smoothstep.
    Quintic,
}

impl From<RemapArg> for Remap {
    fn from(arg: RemapArg) -> Self {
        match arg {
            RemapArg::Identity => Remap::Identity,
            RemapArg::Cosine => Remap::Cosine,
            RemapArg::Smoothstep => Remap::Smoothstep,
            RemapArg::Quintic => Remap::Quintic,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DecayArg {
    /// 1 / 2^i.
    Halving,
    /// 1 / max(1, i).
    Harmonic,
    /// persistence^i.
    Persistence,
}

impl DecayArg {
    fn into_decay(self, persistence: f32) -> AmplitudeDecay {
        match self {
            DecayArg::Halving => AmplitudeDecay::Halving,
            DecayArg::Harmonic => AmplitudeDecay::Harmonic,
            DecayArg::Persistence => AmplitudeDecay::Persistence(persistence),
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Line {
            samples,
            offset,
            seed,
            octaves,
            base_size,
            remap,
            decay,
            persistence,
        } => {
            let config = FractalConfig {
                octaves,
                base_size,
                growth: SizeGrowth::Linear,
                seed: seed.unwrap_or_else(time_seed),
                remap: remap.into(),
                decay: decay.into_decay(persistence),
            };
            run_line(&config, samples, offset);
        }
        Commands::Grid {
            width,
            height,
            offset_x,
            offset_y,
            seed,
            octaves,
            base_resolution,
            remap,
            decay,
            persistence,
        } => {
            let config = FractalConfig {
                octaves,
                base_size: base_resolution,
                growth: SizeGrowth::Doubling,
                seed: seed.unwrap_or_else(time_seed),
                remap: remap.into(),
                decay: decay.into_decay(persistence),
            };
            run_grid(&config, width, height, (offset_x, offset_y));
        }
        Commands::Info {
            octaves,
            decay,
            persistence,
        } => {
            run_info(octaves, decay.into_decay(persistence));
        }
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run_line(config: &FractalConfig, samples: usize, offset: i64) {
    info!(
        "Line: samples={}, offset={}, seed={}, octaves={}, remap={}, decay={}",
        samples,
        offset,
        config.seed,
        config.octaves,
        config.remap,
        config.decay.name()
    );

    let octaves = config.build_line().unwrap_or_else(|e| {
        eprintln!("Error building octaves: {}", e);
        std::process::exit(1);
    });

    let values = fractalise(&octaves, samples, offset, config.decay).unwrap_or_else(|e| {
        eprintln!("Error sampling noise: {}", e);
        std::process::exit(1);
    });

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for value in values {
        if writeln!(out, "{}", value).is_err() {
            // Closed pipe.
            return;
        }
    }
    let _ = out.flush();
}

fn run_grid(config: &FractalConfig, width: u32, height: u32, offset: (i64, i64)) {
    if width == 0 || height == 0 || width > 16384 || height > 16384 {
        eprintln!("Error: Width and height must be between 1 and 16384");
        std::process::exit(1);
    }

    info!(
        "Grid: {}x{}, offset=({}, {}), seed={}, octaves={} (base resolution {}), remap={}, decay={}",
        width,
        height,
        offset.0,
        offset.1,
        config.seed,
        config.octaves,
        config.base_size,
        config.remap,
        config.decay.name()
    );

    let start = Instant::now();

    let octaves = config.build_grid().unwrap_or_else(|e| {
        eprintln!("Error building octaves: {}", e);
        std::process::exit(1);
    });

    let grid = fractalise_2d(&octaves, width, height, offset, config.decay).unwrap_or_else(|e| {
        eprintln!("Error sampling noise: {}", e);
        std::process::exit(1);
    });

    let (min_v, max_v) = grid.range();
    info!(
        "Sampling completed in {:.2?}, value range [{:.4}, {:.4}]",
        start.elapsed(),
        min_v,
        max_v
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for y in 0..grid.height {
        let row = grid
            .row(y)
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if writeln!(out, "{}", row).is_err() {
            // Closed pipe.
            return;
        }
    }
    let _ = out.flush();
}

fn run_info(octaves: u8, decay: AmplitudeDecay) {
    if let Err(e) = decay.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Amplitude decay: {}", decay.name());
    println!("==========================");
    for i in 0..octaves as usize {
        println!("  octave {:>2}: {:.6}", i, decay.amplitude(i));
    }
    println!("Total amplitude: {:.6}", decay.total_amplitude(octaves as usize));
}
