//! Batched lattice evaluation.
//!
//! Every batch entry point runs the lattice's scalar `eval` over the input
//! with rayon, so batched and point-by-point results are identical.

mod grid;

use glam::Vec2;
use log::trace;
use rayon::prelude::*;

use crate::lattice::{EvalError, Lattice};

pub use grid::{GridSpec, NoiseGrid};

/// Points per rayon work item.
const CHUNK_SIZE: usize = 1024;

/// Data-parallel evaluation over arrays and grids of points.
///
/// Implemented for every [`Lattice`].
pub trait BatchEval: Lattice {
    /// Evaluates every point in `points`, preserving order.
    fn eval_batch(&self, points: &[Self::Point]) -> Result<Vec<f32>, EvalError> {
        let mut out = vec![0.0; points.len()];
        self.eval_batch_into(points, &mut out)?;
        Ok(out)
    }

    /// Evaluates `points` into `out`.
    ///
    /// On error `out` is partially written.
    ///
    /// # Panics
    /// Panics if `out` and `points` differ in length.
    fn eval_batch_into(&self, points: &[Self::Point], out: &mut [f32]) -> Result<(), EvalError> {
        assert_eq!(points.len(), out.len(), "output length must match point count");
        trace!("Evaluating batch of {} points", points.len());

        out.par_chunks_mut(CHUNK_SIZE)
            .zip(points.par_chunks(CHUNK_SIZE))
            .try_for_each(|(out_chunk, point_chunk)| {
                for (value, &point) in out_chunk.iter_mut().zip(point_chunk) {
                    *value = self.eval(point)?;
                }
                Ok(())
            })
    }

    /// Evaluates every cell of `spec`.
    fn eval_grid(&self, spec: &GridSpec) -> Result<NoiseGrid, EvalError>
    where
        Self: Lattice<Point = Vec2>,
    {
        let mut grid = NoiseGrid::new(spec.width, spec.height);
        trace!("Evaluating {}x{} grid", spec.width, spec.height);

        grid.data
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(i, value)| {
                *value = self.eval(spec.point(i))?;
                Ok::<(), EvalError>(())
            })?;

        Ok(grid)
    }
}

impl<L: Lattice + ?Sized> BatchEval for L {}
