//! Fractal (fBm) composition of value noise octaves.
//!
//! An octave stack is summed with per-octave coordinate scales and
//! amplitudes. The amplitude law is an explicit [`AmplitudeDecay`] choice;
//! [`AmplitudeDecay::Halving`] is the default.

mod compose;
mod config;
mod decay;

use thiserror::Error;

use crate::lattice::{EvalError, LatticeError};

pub use compose::{fractalise, fractalise_2d, Fractal, Octave};
pub use config::{FractalConfig, SizeGrowth};
pub use decay::AmplitudeDecay;

/// Errors that can occur while building or sampling a fractal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FractalError {
    #[error("Fractal needs at least one octave")]
    NoOctaves,
    #[error("Sample extent must be non-zero")]
    ZeroExtent,
    #[error("Persistence must lie strictly between 0 and 1, got {0}")]
    InvalidPersistence(f32),
    #[error("Lattice size overflows at octave {octave}")]
    SizeOverflow { octave: usize },
    #[error("Invalid octave lattice: {0}")]
    Lattice(#[from] LatticeError),
    #[error("Evaluation failed: {0}")]
    Eval(#[from] EvalError),
}
