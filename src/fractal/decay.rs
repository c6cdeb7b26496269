//! Per-octave amplitude weighting.

use serde::{Deserialize, Serialize};

use super::FractalError;

/// How octave amplitudes fall off with octave index.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmplitudeDecay {
    /// `1 / 2^i`: classic fractal Brownian motion.
    #[default]
    Halving,
    /// `1 / max(1, i)`: the first two octaves both get full weight and the
    /// total grows without bound as octaves are added.
    Harmonic,
    /// `p^i` for a persistence `0 < p < 1`.
    Persistence(f32),
}

impl AmplitudeDecay {
    /// Checks the policy parameters.
    pub fn validate(self) -> Result<(), FractalError> {
        match self {
            AmplitudeDecay::Persistence(p) if !(p > 0.0 && p < 1.0) => {
                Err(FractalError::InvalidPersistence(p))
            }
            _ => Ok(()),
        }
    }

    /// Weight of the octave at `index`.
    pub fn amplitude(self, index: usize) -> f32 {
        let exponent = index.min(i32::MAX as usize) as i32;
        match self {
            AmplitudeDecay::Halving => 0.5f32.powi(exponent),
            AmplitudeDecay::Harmonic => 1.0 / index.max(1) as f32,
            AmplitudeDecay::Persistence(p) => p.powi(exponent),
        }
    }

    /// Sum of the weights of the first `octaves` octaves.
    pub fn total_amplitude(self, octaves: usize) -> f32 {
        (0..octaves).map(|i| self.amplitude(i)).sum()
    }

    /// Returns the name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            AmplitudeDecay::Halving => "halving",
            AmplitudeDecay::Harmonic => "harmonic",
            AmplitudeDecay::Persistence(_) => "persistence",
        }
    }
}
