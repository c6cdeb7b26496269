//! Seeded value noise.
//!
//! This crate generates smooth pseudo-random scalar fields by interpolating
//! between randomly sampled lattice points in one or two dimensions, and
//! composes several such lattices into fractal noise.

pub mod remap;
pub mod lattice;
pub mod batch;
pub mod fractal;

pub use remap::{Remap, RemapError};
pub use lattice::{Lattice, Lattice1D, Lattice2D, LatticeError, EvalError};
pub use batch::{BatchEval, GridSpec, NoiseGrid};
pub use fractal::{
    fractalise, fractalise_2d, AmplitudeDecay, Fractal, FractalConfig, FractalError, Octave,
    SizeGrowth,
};
