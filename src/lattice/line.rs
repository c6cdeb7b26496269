//! One-dimensional value noise lattice.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::wrap::wrap_modulo;
use super::{lerp, EvalError, Lattice, LatticeError};
use crate::batch::BatchEval;
use crate::remap::Remap;

/// A ring of `size` random values in [0, 1) interpolated with a remap curve.
#[derive(Debug, Clone)]
pub struct Lattice1D {
    size: usize,
    seed: u64,
    values: Vec<f32>,
    remap: Remap,
}

impl Lattice1D {
    /// Smallest accepted number of vertices.
    pub const MIN_SIZE: usize = 2;

    /// Creates a lattice of `size` vertices drawn from a generator seeded with `seed`.
    ///
    /// The same `size` and `seed` always produce the same vertex values.
    ///
    /// # Errors
    /// [`LatticeError::SizeTooSmall`] if `size < 2`.
    pub fn new(size: usize, seed: u64, remap: Remap) -> Result<Self, LatticeError> {
        if size < Self::MIN_SIZE {
            return Err(LatticeError::SizeTooSmall {
                size,
                min: Self::MIN_SIZE,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let values = (0..size).map(|_| rng.random::<f32>()).collect();

        debug!("Built 1D lattice: size={}, seed={}, remap={}", size, seed, remap);

        Ok(Self {
            size,
            seed,
            values,
            remap,
        })
    }

    /// Creates a linearly interpolated lattice.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, LatticeError> {
        Self::new(size, seed, Remap::Identity)
    }

    /// Number of vertices (the period of the field).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Seed the vertices were drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The raw vertex values.
    pub fn vertices(&self) -> &[f32] {
        &self.values
    }

    /// Evaluates the field at `point`.
    ///
    /// Negative points wrap with true modulo, and the last vertex
    /// interpolates towards the first.
    pub fn eval(&self, point: f32) -> Result<f32, EvalError> {
        self.eval_offset(point, 0)
    }

    /// Evaluates the field at `point` shifted by `offset` whole vertices.
    pub fn eval_offset(&self, point: f32, offset: i64) -> Result<f32, EvalError> {
        if !point.is_finite() {
            return Err(EvalError::NonFinitePoint);
        }
        let stencil = wrap_modulo(point, offset, self.size);
        let t = self.remap.try_apply(stencil.t)?;
        Ok(lerp(self.values[stencil.lower], self.values[stencil.higher], t))
    }

    /// Samples one full period stretched over `samples` outputs.
    ///
    /// Sample `i` is taken at `(i + offset) / samples * size`, so shifting
    /// `offset` scrolls the curve by whole samples.
    pub fn sample_line(&self, samples: usize, offset: i64) -> Result<Vec<f32>, EvalError> {
        if samples == 0 {
            return Ok(Vec::new());
        }
        let step = self.size as f32 / samples as f32;
        let points: Vec<f32> = (0..samples)
            .map(|i| (i as i64).wrapping_add(offset) as f32 * step)
            .collect();
        self.eval_batch(&points)
    }
}

impl Lattice for Lattice1D {
    type Point = f32;

    fn period(&self) -> usize {
        self.size
    }

    fn remap(&self) -> Remap {
        self.remap
    }

    fn eval(&self, point: f32) -> Result<f32, EvalError> {
        Lattice1D::eval(self, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remap::RemapError;

    fn lattices(size: usize, seed: u64) -> Vec<Lattice1D> {
        Remap::NAMED
            .iter()
            .map(|&remap| Lattice1D::new(size, seed, remap).unwrap())
            .collect()
    }

    #[test]
    fn test_rejects_small_sizes() {
        assert_eq!(
            Lattice1D::with_seed(0, 1).unwrap_err(),
            LatticeError::SizeTooSmall { size: 0, min: 2 }
        );
        assert!(Lattice1D::with_seed(1, 1).is_err());
        assert!(Lattice1D::with_seed(2, 1).is_ok());
    }

    #[test]
    fn test_same_seed_same_values() {
        for seed in [0u64, 1, 69, 32565, u64::MAX] {
            let a = Lattice1D::with_seed(256, seed).unwrap();
            let b = Lattice1D::with_seed(256, seed).unwrap();
            assert_eq!(a.vertices(), b.vertices(), "seed {}", seed);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Lattice1D::with_seed(64, 1).unwrap();
        let b = Lattice1D::with_seed(64, 2).unwrap();
        assert_ne!(a.vertices(), b.vertices());
    }

    #[test]
    fn test_values_in_unit_interval() {
        let lattice = Lattice1D::with_seed(1024, 7).unwrap();
        assert_eq!(lattice.vertices().len(), 1024);
        assert!(lattice.vertices().iter().all(|&v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn test_exact_at_nodes() {
        for lattice in lattices(16, 3) {
            for node in -40i64..40 {
                let expected = lattice.vertices()[node.rem_euclid(16) as usize];
                assert_eq!(lattice.eval(node as f32).unwrap(), expected, "node {}", node);
            }
        }
    }

    #[test]
    fn test_periodic() {
        for lattice in lattices(16, 11) {
            for step in 0..64 {
                let point = step as f32 * 0.3125;
                let base = lattice.eval(point).unwrap();
                for k in [-3i32, -1, 1, 2, 5] {
                    let shifted = lattice.eval(point + (k * 16) as f32).unwrap();
                    assert!(
                        (base - shifted).abs() < 1e-4,
                        "{}: point {} k {}: {} vs {}",
                        lattice.remap(),
                        point,
                        k,
                        base,
                        shifted
                    );
                }
            }
        }
    }

    #[test]
    fn test_periodic_exact_for_dyadic_points() {
        // Dyadic fractions survive the shift by 16k without rounding.
        for lattice in lattices(16, 11) {
            for cell in 0..16 {
                for frac in [0.0f32, 0.125, 0.25, 0.5, 0.75] {
                    let point = cell as f32 + frac;
                    let base = lattice.eval(point).unwrap();
                    for k in [-4i32, -1, 1, 3, 8] {
                        let shifted = point + (k * 16) as f32;
                        assert_eq!(
                            lattice.eval(shifted).unwrap(),
                            base,
                            "{}: {} vs {}",
                            lattice.remap(),
                            point,
                            shifted
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_continuous_across_period_boundary() {
        for lattice in lattices(8, 5) {
            let below = lattice.eval(8.0 - 1e-4).unwrap();
            let at = lattice.eval(8.0).unwrap();
            let above = lattice.eval(8.0 + 1e-4).unwrap();
            assert!((below - at).abs() < 1e-3, "{}", lattice.remap());
            assert!((above - at).abs() < 1e-3, "{}", lattice.remap());
        }
    }

    #[test]
    fn test_negative_points_wrap() {
        let lattice = Lattice1D::with_seed(8, 9).unwrap();
        let v = lattice.vertices();
        let expected = lerp(v[7], v[0], 0.5);
        assert!((lattice.eval(-0.5).unwrap() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_linear_midpoint() {
        let lattice = Lattice1D::with_seed(10, 0).unwrap();
        let v = lattice.vertices();
        let expected = (v[3] + v[4]) * 0.5;
        assert!((lattice.eval(3.5).unwrap() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_eval_offset_matches_shifted_point() {
        let lattice = Lattice1D::new(32, 4, Remap::Cosine).unwrap();
        for offset in [-70i64, -1, 0, 3, 33] {
            let shifted = lattice.eval_offset(1.75, offset).unwrap();
            let direct = lattice.eval(1.75 + offset as f32).unwrap();
            assert!((shifted - direct).abs() < 1e-5, "offset {}", offset);
        }
    }

    #[test]
    fn test_non_finite_point_is_rejected() {
        let lattice = Lattice1D::new(8, 0, Remap::Cosine).unwrap();
        assert_eq!(lattice.eval(f32::NAN), Err(EvalError::NonFinitePoint));
        assert_eq!(lattice.eval(f32::NEG_INFINITY), Err(EvalError::NonFinitePoint));
    }

    #[test]
    fn test_remap_failure_propagates() {
        fn broken(_t: f32) -> f32 {
            f32::NAN
        }
        let lattice = Lattice1D::new(8, 0, Remap::Custom(broken)).unwrap();
        assert!(matches!(
            lattice.eval(0.5),
            Err(EvalError::Remap(RemapError::NonFiniteOutput { .. }))
        ));
    }

    #[test]
    fn test_sample_line() {
        let lattice = Lattice1D::with_seed(16, 2).unwrap();
        let line = lattice.sample_line(64, 0).unwrap();
        assert_eq!(line.len(), 64);
        // Every fourth sample lands on a vertex.
        for (i, value) in line.iter().enumerate().step_by(4) {
            assert_eq!(*value, lattice.vertices()[i / 4]);
        }

        let scrolled = lattice.sample_line(64, 4).unwrap();
        assert_eq!(&scrolled[..60], &line[4..]);
        assert!(lattice.sample_line(0, 0).unwrap().is_empty());
    }
}
