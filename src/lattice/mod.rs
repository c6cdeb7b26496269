//! Value noise lattices.
//!
//! A lattice owns a fixed set of random anchor values drawn once from a
//! seeded generator and interpolates between them. Both lattices tile: any
//! coordinate wraps back onto the lattice, so the field is periodic.

mod line;
mod grid;
pub mod wrap;

use std::ops::Mul;

use thiserror::Error;

use crate::remap::{Remap, RemapError};

pub use grid::Lattice2D;
pub use line::Lattice1D;

/// Errors raised when constructing a lattice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    #[error("Lattice size must be at least {min}, got {size}")]
    SizeTooSmall { size: usize, min: usize },
    #[error("Lattice resolution must be non-zero")]
    ZeroResolution,
    #[error("Lattice resolution must be a power of two, got {resolution}")]
    NonPowerOfTwoResolution { resolution: usize },
    #[error("Lattice resolution {resolution} exceeds the maximum of {max}")]
    ResolutionTooLarge { resolution: usize, max: usize },
}

/// Errors raised when evaluating a lattice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Evaluation point must be finite")]
    NonFinitePoint,
    #[error("Remap failed: {0}")]
    Remap(#[from] RemapError),
}

/// A periodic noise field backed by random anchor values.
///
/// Implementations are immutable after construction and may be shared across
/// threads without locking.
pub trait Lattice: Send + Sync {
    /// Coordinate type accepted by [`Lattice::eval`].
    type Point: Copy + Send + Sync + Mul<f32, Output = Self::Point>;

    /// Number of vertices along each axis before the field repeats.
    fn period(&self) -> usize;

    /// Ease curve applied to fractional offsets.
    fn remap(&self) -> Remap;

    /// Evaluates the field at `point`.
    fn eval(&self, point: Self::Point) -> Result<f32, EvalError>;
}

impl<L: Lattice + ?Sized> Lattice for &L {
    type Point = L::Point;

    fn period(&self) -> usize {
        (**self).period()
    }

    fn remap(&self) -> Remap {
        (**self).remap()
    }

    fn eval(&self, point: Self::Point) -> Result<f32, EvalError> {
        (**self).eval(point)
    }
}

/// Linear interpolation: `low·(1 - t) + high·t`.
///
/// Exact at both ends: `t = 0` yields `low` and `t = 1` yields `high`.
#[inline]
pub fn lerp(low: f32, high: f32, t: f32) -> f32 {
    low * (1.0 - t) + high * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        assert_eq!(lerp(0.3, 0.9, 0.0), 0.3);
        assert_eq!(lerp(0.3, 0.9, 1.0), 0.9);
        assert!((lerp(0.0, 1.0, 0.25) - 0.25).abs() < 1e-7);
    }

    #[test]
    fn test_error_messages() {
        let err = LatticeError::NonPowerOfTwoResolution { resolution: 12 };
        assert_eq!(err.to_string(), "Lattice resolution must be a power of two, got 12");

        let err = EvalError::from(RemapError::NonFiniteInput(f32::INFINITY));
        assert!(err.to_string().starts_with("Remap failed"));
    }
}
