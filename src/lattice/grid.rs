//! Two-dimensional value noise lattice.

use glam::Vec2;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::wrap::wrap_mask;
use super::{lerp, EvalError, Lattice, LatticeError};
use crate::remap::Remap;

/// A square, tiling grid of random values in [0, 1) with bilinear
/// interpolation.
///
/// The resolution must be a power of two: wraparound is computed with a
/// bitmask, which only equals modulo for powers of two.
#[derive(Debug, Clone)]
pub struct Lattice2D {
    resolution: usize,
    mask: usize,
    seed: u64,
    /// Row-major, `resolution * resolution` values.
    values: Vec<f32>,
    remap: Remap,
}

impl Lattice2D {
    /// Resolution used by [`Lattice2D::with_seed`].
    pub const DEFAULT_RESOLUTION: usize = 256;

    /// Largest accepted resolution (2^28 vertices, 1 GiB of values).
    pub const MAX_RESOLUTION: usize = 1 << 14;

    /// Validates `resolution` and returns the vertex count it would allocate.
    ///
    /// # Errors
    /// [`LatticeError::ZeroResolution`],
    /// [`LatticeError::NonPowerOfTwoResolution`] or
    /// [`LatticeError::ResolutionTooLarge`].
    pub fn check_resolution(resolution: usize) -> Result<usize, LatticeError> {
        if resolution == 0 {
            return Err(LatticeError::ZeroResolution);
        }
        if !resolution.is_power_of_two() {
            return Err(LatticeError::NonPowerOfTwoResolution { resolution });
        }
        let too_large = LatticeError::ResolutionTooLarge {
            resolution,
            max: Self::MAX_RESOLUTION,
        };
        if resolution > Self::MAX_RESOLUTION {
            return Err(too_large);
        }
        resolution.checked_mul(resolution).ok_or(too_large)
    }

    /// Creates a `resolution × resolution` lattice drawn from a generator
    /// seeded with `seed`.
    ///
    /// # Errors
    /// Any error of [`Lattice2D::check_resolution`].
    pub fn new(resolution: usize, seed: u64, remap: Remap) -> Result<Self, LatticeError> {
        let cells = Self::check_resolution(resolution)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let values = (0..cells)
            .map(|_| rng.random::<f32>())
            .collect();

        debug!(
            "Built 2D lattice: resolution={}, seed={}, remap={}",
            resolution, seed, remap
        );

        Ok(Self {
            resolution,
            mask: resolution - 1,
            seed,
            values,
            remap,
        })
    }

    /// Creates a smoothstep lattice at [`Lattice2D::DEFAULT_RESOLUTION`].
    pub fn with_seed(seed: u64) -> Result<Self, LatticeError> {
        Self::new(Self::DEFAULT_RESOLUTION, seed, Remap::Smoothstep)
    }

    /// Returns the number of vertices along each axis.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Returns the seed the vertex values were drawn with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All vertex values, row-major.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Vertex value at column `x`, row `y`.
    ///
    /// # Panics
    /// If `x` or `y` is not below the resolution.
    pub fn value(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.resolution && y < self.resolution, "vertex ({}, {}) out of range", x, y);
        self.values[y * self.resolution + x]
    }

    /// Evaluates the surface at `point`.
    pub fn eval(&self, point: Vec2) -> Result<f32, EvalError> {
        if !point.is_finite() {
            return Err(EvalError::NonFinitePoint);
        }

        let sx = wrap_mask(point.x, self.mask);
        let sy = wrap_mask(point.y, self.mask);

        let row_top = sy.lower * self.resolution;
        let row_bottom = sy.higher * self.resolution;
        let top_left = self.values[row_top + sx.lower];
        let top_right = self.values[row_top + sx.higher];
        let bottom_left = self.values[row_bottom + sx.lower];
        let bottom_right = self.values[row_bottom + sx.higher];

        let tx = self.remap.try_apply(sx.t)?;
        let ty = self.remap.try_apply(sy.t)?;

        Ok(lerp(
            lerp(top_left, top_right, tx),
            lerp(bottom_left, bottom_right, tx),
            ty,
        ))
    }
}

impl Lattice for Lattice2D {
    type Point = Vec2;

    fn period(&self) -> usize {
        self.resolution
    }

    fn remap(&self) -> Remap {
        self.remap
    }

    fn eval(&self, point: Vec2) -> Result<f32, EvalError> {
        Lattice2D::eval(self, point)
    }
}
