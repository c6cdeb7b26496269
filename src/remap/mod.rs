//! Remap (ease) functions applied to the fractional lattice offset before
//! interpolation.
//!
//! A [`Remap`] is a plain value: the predefined curves are dispatched through
//! a `match`, and callers can plug in their own curve with [`Remap::Custom`].

mod curves;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use curves::{cosine_ease, identity, quintic_smoothstep, smoothstep};

/// Errors raised while remapping a fractional offset.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemapError {
    #[error("Remap input must be finite, got {0}")]
    NonFiniteInput(f32),
    #[error("Remap produced a non-finite value {output} for input {input}")]
    NonFiniteOutput { input: f32, output: f32 },
    #[error("Unknown remap function '{0}'")]
    UnknownName(String),
}

/// Ease curve used to reshape the fractional position between two vertices.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Remap {
    /// Linear interpolation.
    #[default]
    Identity,
    /// `(1 - cos(t·π)) / 2`.
    Cosine,
    /// Cubic smoothstep.
    Smoothstep,
    /// Quintic ("Perlin") smoothstep.
    Quintic,
    /// Caller-supplied curve.
    #[serde(skip)]
    Custom(fn(f32) -> f32),
}

impl Remap {
    /// All named curves, in declaration order.
    pub const NAMED: [Remap; 4] = [Remap::Identity, Remap::Cosine, Remap::Smoothstep, Remap::Quintic];

    /// Applies the curve without validating input or output.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Remap::Identity => identity(t),
            Remap::Cosine => cosine_ease(t),
            Remap::Smoothstep => smoothstep(t),
            Remap::Quintic => quintic_smoothstep(t),
            Remap::Custom(f) => f(t),
        }
    }

    /// Applies the curve, rejecting non-finite input and non-finite output.
    ///
    /// Callers are not required to clamp `t` into [0, 1] first; any finite
    /// value is accepted.
    #[inline]
    pub fn try_apply(self, t: f32) -> Result<f32, RemapError> {
        if !t.is_finite() {
            return Err(RemapError::NonFiniteInput(t));
        }
        let output = self.apply(t);
        if !output.is_finite() {
            return Err(RemapError::NonFiniteOutput { input: t, output });
        }
        Ok(output)
    }

    /// Returns the name of the curve.
    pub fn name(&self) -> &'static str {
        match self {
            Remap::Identity => "identity",
            Remap::Cosine => "cosine",
            Remap::Smoothstep => "smoothstep",
            Remap::Quintic => "quintic",
            Remap::Custom(_) => "custom",
        }
    }

    /// Returns true if the curve maps 0 to exactly 0.
    ///
    /// Lattices built with such a curve reproduce their stored vertex values
    /// at integer coordinates.
    pub fn fixes_origin(self) -> bool {
        self.apply(0.0) == 0.0
    }
}

impl fmt::Display for Remap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Remap {
    type Err = RemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "identity" | "linear" => Ok(Remap::Identity),
            "cosine" => Ok(Remap::Cosine),
            "smoothstep" | "cubic" => Ok(Remap::Smoothstep),
            "quintic" | "perlin" | "perlin_smoothstep" => Ok(Remap::Quintic),
            _ => Err(RemapError::UnknownName(s.to_string())),
        }
    }
}
