//! Wraparound index computation shared by the scalar and batched paths.

/// Interpolation stencil along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStencil {
    /// Vertex at or below the point.
    pub lower: usize,
    /// Next vertex, wrapped to 0 after the last one.
    pub higher: usize,
    /// Raw fractional offset of the point past `lower`, in [0, 1).
    pub t: f32,
}

/// Wraps `point` onto a lattice of `size` vertices using true (non-negative)
/// modulo, after shifting the cell index by `offset` whole vertices.
///
/// `size` must be non-zero.
#[inline]
pub fn wrap_modulo(point: f32, offset: i64, size: usize) -> AxisStencil {
    let floor = point.floor();
    let cell = (floor as i64).wrapping_add(offset);
    let lower = cell.rem_euclid(size as i64) as usize;
    // `lower` is already reduced, so only the last vertex can overflow.
    let higher = if lower == size - 1 { 0 } else { lower + 1 };
    AxisStencil {
        lower,
        higher,
        t: point - floor,
    }
}

/// Wraps `point` with a bitmask. Equals true modulo only when `mask + 1` is a
/// power of two; two's complement makes negative cells wrap correctly.
#[inline]
pub fn wrap_mask(point: f32, mask: usize) -> AxisStencil {
    let floor = point.floor();
    let cell = floor as i64;
    let mask = mask as i64;
    AxisStencil {
        lower: (cell & mask) as usize,
        higher: (cell.wrapping_add(1) & mask) as usize,
        t: point - floor,
    }
}
