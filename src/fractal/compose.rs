//! Octave summation.

use glam::Vec2;
use log::debug;
use rayon::prelude::*;

use super::{AmplitudeDecay, FractalError};
use crate::batch::NoiseGrid;
use crate::lattice::{EvalError, Lattice, Lattice1D, Lattice2D};

/// One layer of a fractal stack: a lattice sampled at `point * scale`.
#[derive(Debug, Clone)]
pub struct Octave<L> {
    pub lattice: L,
    /// Multiplier applied to query coordinates before evaluating the lattice.
    pub scale: f32,
}

impl<L> Octave<L> {
    /// Creates an octave sampling `lattice` at `point * scale`.
    pub fn new(lattice: L, scale: f32) -> Self {
        Self { lattice, scale }
    }
}

/// An ordered stack of octaves combined with an amplitude decay policy.
///
/// The composed value is `Σ lattice_i(point · scale_i) · amplitude(i)`.
/// No normalisation is applied.
#[derive(Debug, Clone)]
pub struct Fractal<L> {
    octaves: Vec<Octave<L>>,
    decay: AmplitudeDecay,
    weights: Vec<f32>,
}

impl<L: Lattice> Fractal<L> {
    /// Creates a fractal from explicit octaves.
    ///
    /// # Errors
    /// [`FractalError::NoOctaves`] for an empty stack, or
    /// [`FractalError::InvalidPersistence`] for a bad decay parameter.
    pub fn new(octaves: Vec<Octave<L>>, decay: AmplitudeDecay) -> Result<Self, FractalError> {
        if octaves.is_empty() {
            return Err(FractalError::NoOctaves);
        }
        decay.validate()?;

        let weights = (0..octaves.len()).map(|i| decay.amplitude(i)).collect();
        debug!(
            "Assembled fractal: {} octaves, decay={}, total amplitude={}",
            octaves.len(),
            decay.name(),
            decay.total_amplitude(octaves.len())
        );

        Ok(Self {
            octaves,
            decay,
            weights,
        })
    }

    /// Creates a fractal whose octaves each span one full period over
    /// `extent` units: octave `i` gets scale `period_i / extent`.
    pub fn spanning(
        lattices: impl IntoIterator<Item = L>,
        extent: usize,
        decay: AmplitudeDecay,
    ) -> Result<Self, FractalError> {
        if extent == 0 {
            return Err(FractalError::ZeroExtent);
        }
        let octaves = lattices
            .into_iter()
            .map(|lattice| {
                let scale = lattice.period() as f32 / extent as f32;
                Octave::new(lattice, scale)
            })
            .collect();
        Self::new(octaves, decay)
    }

    /// Returns the octaves in stack order.
    pub fn octaves(&self) -> &[Octave<L>] {
        &self.octaves
    }

    /// Returns the amplitude decay policy.
    pub fn decay(&self) -> AmplitudeDecay {
        self.decay
    }

    /// Number of octaves.
    pub fn len(&self) -> usize {
        self.octaves.len()
    }

    /// Always false once constructed; `new` rejects empty stacks.
    pub fn is_empty(&self) -> bool {
        self.octaves.is_empty()
    }

    /// Sum of all octave weights; an upper bound on the composed value
    /// since every lattice value lies in [0, 1).
    pub fn total_amplitude(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// Evaluates the composed field at `point`.
    pub fn compose(&self, point: L::Point) -> Result<f32, EvalError> {
        let mut total = 0.0f32;
        for (octave, &weight) in self.octaves.iter().zip(&self.weights) {
            total += octave.lattice.eval(point * octave.scale)? * weight;
        }
        Ok(total)
    }

    /// Evaluates the composed field at every point, in parallel.
    pub fn compose_batch(&self, points: &[L::Point]) -> Result<Vec<f32>, EvalError> {
        points.par_iter().map(|&point| self.compose(point)).collect()
    }
}

impl<L: Lattice<Point = f32>> Fractal<L> {
    /// Samples `samples` consecutive unit steps starting at `offset`.
    pub fn sample_line(&self, samples: usize, offset: i64) -> Result<Vec<f32>, EvalError> {
        let points: Vec<f32> = (0..samples)
            .map(|i| (i as i64).wrapping_add(offset) as f32)
            .collect();
        self.compose_batch(&points)
    }
}

impl<L: Lattice<Point = Vec2>> Fractal<L> {
    /// Samples a `width × height` block of unit cells with its top-left
    /// corner at `offset`.
    pub fn sample_grid(&self, width: u32, height: u32, offset: (i64, i64)) -> Result<NoiseGrid, EvalError> {
        let mut grid = NoiseGrid::new(width, height);
        let (ox, oy) = offset;

        grid.data
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(i, value)| {
                let x = (i % width as usize) as i64;
                let y = (i / width as usize) as i64;
                let point = Vec2::new(x.wrapping_add(ox) as f32, y.wrapping_add(oy) as f32);
                *value = self.compose(point)?;
                Ok::<(), EvalError>(())
            })?;

        Ok(grid)
    }
}

/// Composes 1D octaves into `samples` values.
///
/// Each octave's full period is stretched over `samples` outputs and
/// sample `i` is taken at `i + offset`.
pub fn fractalise(
    octaves: &[Lattice1D],
    samples: usize,
    offset: i64,
    decay: AmplitudeDecay,
) -> Result<Vec<f32>, FractalError> {
    if octaves.is_empty() {
        return Err(FractalError::NoOctaves);
    }
    if samples == 0 {
        return Ok(Vec::new());
    }
    let fractal = Fractal::spanning(octaves, samples, decay)?;
    Ok(fractal.sample_line(samples, offset)?)
}

/// Composes 2D octaves into a `width × height` grid.
///
/// Each octave's full period is stretched over `width` cells on both axes
/// and cell `(x, y)` is taken at `(x + offset.0, y + offset.1)`.
pub fn fractalise_2d(
    octaves: &[Lattice2D],
    width: u32,
    height: u32,
    offset: (i64, i64),
    decay: AmplitudeDecay,
) -> Result<NoiseGrid, FractalError> {
    if octaves.is_empty() {
        return Err(FractalError::NoOctaves);
    }
    if width == 0 || height == 0 {
        return Ok(NoiseGrid::new(width, height));
    }
    let fractal = Fractal::spanning(octaves, width as usize, decay)?;
    Ok(fractal.sample_grid(width, height, offset)?)
}
