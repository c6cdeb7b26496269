//! Octave stack configuration.

use serde::{Deserialize, Serialize};

use super::{AmplitudeDecay, FractalError};
use crate::lattice::{Lattice1D, Lattice2D};
use crate::remap::Remap;

/// Seed stride between consecutive octaves.
const OCTAVE_SEED_STRIDE: u64 = 31337;

/// How lattice size grows from one octave to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeGrowth {
    /// Every octave uses the base size.
    Constant,
    /// `base * (i + 1)`.
    #[default]
    Linear,
    /// `base * 2^i`. Keeps power-of-two sizes, as 2D lattices require.
    Doubling,
}

impl SizeGrowth {
    /// Lattice size of octave `index`, or `None` on overflow.
    pub fn size(self, base: usize, index: usize) -> Option<usize> {
        match self {
            SizeGrowth::Constant => Some(base),
            SizeGrowth::Linear => base.checked_mul(index.checked_add(1)?),
            SizeGrowth::Doubling => {
                let factor = 1usize.checked_shl(u32::try_from(index).ok()?)?;
                base.checked_mul(factor)
            }
        }
    }
}

/// Configuration for building a stack of seeded octaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractalConfig {
    /// Number of octaves.
    pub octaves: u8,
    /// Lattice size (1D) or resolution (2D) of the first octave.
    pub base_size: usize,
    /// Size progression across octaves.
    pub growth: SizeGrowth,
    /// Master seed; octave `i` is seeded with `seed + i * 31337`.
    pub seed: u64,
    /// Ease curve shared by every octave.
    pub remap: Remap,
    /// Amplitude policy used when composing.
    pub decay: AmplitudeDecay,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            octaves: 8,
            base_size: 16,
            growth: SizeGrowth::Linear,
            seed: 42,
            remap: Remap::Identity,
            decay: AmplitudeDecay::Halving,
        }
    }
}

impl FractalConfig {
    /// Creates a new configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Scrolling-line preset: eight quintic octaves of 16, 32, ... vertices.
    pub fn line(seed: u64) -> Self {
        Self {
            octaves: 8,
            base_size: 16,
            growth: SizeGrowth::Linear,
            seed,
            remap: Remap::Quintic,
            decay: AmplitudeDecay::Halving,
        }
    }

    /// Terrain-like grid preset: six smoothstep octaves doubling from 8.
    pub fn grid(seed: u64) -> Self {
        Self {
            octaves: 6,
            base_size: 8,
            growth: SizeGrowth::Doubling,
            seed,
            remap: Remap::Smoothstep,
            decay: AmplitudeDecay::Halving,
        }
    }

    /// Seed for octave `index`.
    pub fn octave_seed(&self, index: usize) -> u64 {
        self.seed
            .wrapping_add((index as u64).wrapping_mul(OCTAVE_SEED_STRIDE))
    }

    /// Lattice size for octave `index`.
    pub fn octave_size(&self, index: usize) -> Result<usize, FractalError> {
        self.growth
            .size(self.base_size, index)
            .ok_or(FractalError::SizeOverflow { octave: index })
    }

    fn check(&self) -> Result<(), FractalError> {
        if self.octaves == 0 {
            return Err(FractalError::NoOctaves);
        }
        self.decay.validate()
    }

    /// Builds the 1D octave stack.
    pub fn build_line(&self) -> Result<Vec<Lattice1D>, FractalError> {
        self.check()?;
        (0..self.octaves as usize)
            .map(|i| {
                let lattice = Lattice1D::new(self.octave_size(i)?, self.octave_seed(i), self.remap)?;
                Ok(lattice)
            })
            .collect()
    }

    /// Builds the 2D octave stack.
    ///
    /// Every octave resolution must be a power of two, so `Linear` growth
    /// fails from the third octave on. All resolutions are validated before
    /// any lattice is allocated.
    pub fn build_grid(&self) -> Result<Vec<Lattice2D>, FractalError> {
        self.check()?;
        for i in 0..self.octaves as usize {
            Lattice2D::check_resolution(self.octave_size(i)?)?;
        }
        (0..self.octaves as usize)
            .map(|i| {
                let lattice = Lattice2D::new(self.octave_size(i)?, self.octave_seed(i), self.remap)?;
                Ok(lattice)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Lattice, LatticeError};

    #[test]
    fn test_default_config() {
        let config = FractalConfig::default();
        assert_eq!(config.octaves, 8);
        assert_eq!(config.base_size, 16);
        assert_eq!(config.decay, AmplitudeDecay::Halving);
    }

    #[test]
    fn test_growth_sizes() {
        assert_eq!(SizeGrowth::Constant.size(16, 5), Some(16));
        assert_eq!(SizeGrowth::Linear.size(16, 0), Some(16));
        assert_eq!(SizeGrowth::Linear.size(16, 7), Some(128));
        assert_eq!(SizeGrowth::Doubling.size(8, 3), Some(64));
        assert_eq!(SizeGrowth::Doubling.size(8, 200), None);
        assert_eq!(SizeGrowth::Linear.size(usize::MAX, 1), None);
    }

    #[test]
    fn test_octave_seeds_are_distinct() {
        let config = FractalConfig::with_seed(7);
        assert_eq!(config.octave_seed(0), 7);
        assert_eq!(config.octave_seed(2), 7 + 2 * 31337);
        assert_eq!(FractalConfig::with_seed(u64::MAX).octave_seed(1), 31336);
    }

    #[test]
    fn test_build_line() {
        let config = FractalConfig::line(5);
        let octaves = config.build_line().unwrap();
        assert_eq!(octaves.len(), 8);
        for (i, lattice) in octaves.iter().enumerate() {
            assert_eq!(lattice.size(), 16 * (i + 1));
            assert_eq!(lattice.seed(), config.octave_seed(i));
            assert!(matches!(lattice.remap(), Remap::Quintic));
        }
    }

    #[test]
    fn test_build_is_reproducible() {
        let a = FractalConfig::line(99).build_line().unwrap();
        let b = FractalConfig::line(99).build_line().unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.vertices(), y.vertices());
        }
    }

    #[test]
    fn test_build_grid() {
        let octaves = FractalConfig::grid(1).build_grid().unwrap();
        let resolutions: Vec<usize> = octaves.iter().map(|l| l.resolution()).collect();
        assert_eq!(resolutions, vec![8, 16, 32, 64, 128, 256]);
    }

    #[test]
    fn test_linear_grid_growth_is_rejected() {
        let config = FractalConfig {
            growth: SizeGrowth::Linear,
            ..FractalConfig::grid(1)
        };
        assert!(matches!(
            config.build_grid(),
            Err(FractalError::Lattice(LatticeError::NonPowerOfTwoResolution { resolution: 24 }))
        ));
    }

    #[test]
    fn test_deep_grid_stack_is_rejected_before_allocating() {
        let config = FractalConfig {
            octaves: 30,
            ..FractalConfig::grid(1)
        };
        // 8 * 2^12 is the first resolution past the cap.
        assert!(matches!(
            config.build_grid(),
            Err(FractalError::Lattice(LatticeError::ResolutionTooLarge { resolution: 32768, .. }))
        ));
    }

    #[test]
    fn test_zero_octaves_is_rejected() {
        let config = FractalConfig {
            octaves: 0,
            ..Default::default()
        };
        assert!(matches!(config.build_line(), Err(FractalError::NoOctaves)));
    }

    #[test]
    fn test_small_base_size_is_rejected() {
        let config = FractalConfig {
            base_size: 1,
            growth: SizeGrowth::Constant,
            ..Default::default()
        };
        assert!(matches!(
            config.build_line(),
            Err(FractalError::Lattice(LatticeError::SizeTooSmall { size: 1, .. }))
        ));
    }
}
