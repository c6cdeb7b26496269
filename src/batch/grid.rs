//! Rectangular grids of sampled noise values.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Describes where the cells of a sample grid land in lattice space.
///
/// Cell `(x, y)` is sampled at `origin + (x, y) * step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Lattice coordinate of cell (0, 0).
    pub origin: Vec2,
    /// Lattice distance between neighbouring cells along each axis.
    pub step: Vec2,
}

impl GridSpec {
    /// A grid with one cell per lattice unit starting at the origin.
    pub fn unit(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            origin: Vec2::ZERO,
            step: Vec2::ONE,
        }
    }

    /// Returns this spec with its origin moved to `origin`.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Returns this spec with the cell spacing set to `step`.
    pub fn with_step(mut self, step: Vec2) -> Self {
        self.step = step;
        self
    }

    /// Lattice coordinate of the cell at row-major index `index`.
    #[inline]
    pub fn point(&self, index: usize) -> Vec2 {
        let x = (index % self.width as usize) as f32;
        let y = (index / self.width as usize) as f32;
        self.origin + Vec2::new(x, y) * self.step
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Row-major grid of noise samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseGrid {
    pub width: u32,
    pub height: u32,
    /// Values stored in row-major order.
    pub data: Vec<f32>,
}

impl NoiseGrid {
    /// Creates a grid filled with 0.0.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; (width as usize) * (height as usize)],
        }
    }

    /// Returns the value at the given cell.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.data[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Sets the value at the given cell.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        debug_assert!(x < self.width && y < self.height);
        self.data[(y as usize) * (self.width as usize) + x as usize] = value;
    }

    /// Returns the values of row `y`.
    pub fn row(&self, y: u32) -> &[f32] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Returns (min, max) over all cells.
    pub fn range(&self) -> (f32, f32) {
        let min = self.data.iter().cloned().fold(f32::MAX, f32::min);
        let max = self.data.iter().cloned().fold(f32::MIN, f32::max);
        (min, max)
    }

    /// Returns a copy rescaled linearly onto [0, 1].
    ///
    /// A flat grid maps to all zeros.
    pub fn normalized(&self) -> NoiseGrid {
        let (min, max) = self.range();
        let span = max - min;
        let data = if span > 0.0 {
            self.data.iter().map(|&v| (v - min) / span).collect()
        } else {
            vec![0.0; self.data.len()]
        };
        NoiseGrid {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Returns the total number of cells.
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
