//! Scalar ease curves mapping a fractional offset in [0, 1] onto [0, 1].

use std::f32::consts::PI;

/// Linear pass-through.
#[inline]
pub fn identity(t: f32) -> f32 {
    t
}

/// Half-period cosine ease: `(1 - cos(t·π)) / 2`.
#[inline]
pub fn cosine_ease(t: f32) -> f32 {
    (1.0 - (t * PI).cos()) * 0.5
}

/// Cubic smoothstep: `t²(3 - 2t)`.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Quintic smoothstep (Perlin's improved curve): `6t⁵ - 15t⁴ + 10t³`.
///
/// First and second derivatives vanish at both endpoints.
#[inline]
pub fn quintic_smoothstep(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [(&str, fn(f32) -> f32); 3] = [
        ("cosine", cosine_ease),
        ("smoothstep", smoothstep),
        ("quintic", quintic_smoothstep),
    ];

    #[test]
    fn test_endpoints_and_midpoint() {
        for (name, f) in CURVES {
            assert!(f(0.0).abs() < 1e-6, "{} at 0 was {}", name, f(0.0));
            assert!((f(1.0) - 1.0).abs() < 1e-6, "{} at 1 was {}", name, f(1.0));
            assert!((f(0.5) - 0.5).abs() < 1e-6, "{} at 0.5 was {}", name, f(0.5));
        }
    }

    #[test]
    fn test_monotonic_on_unit_interval() {
        for (name, f) in CURVES {
            let mut previous = f(0.0);
            for step in 1..=1000 {
                let value = f(step as f32 / 1000.0);
                assert!(
                    value >= previous - 1e-6,
                    "{} decreased at step {}: {} < {}",
                    name,
                    step,
                    value,
                    previous
                );
                previous = value;
            }
        }
    }

    #[test]
    fn test_quintic_matches_expanded_polynomial() {
        for step in 0..=20 {
            let t = step as f32 / 20.0;
            let expanded = 6.0 * t.powi(5) - 15.0 * t.powi(4) + 10.0 * t.powi(3);
            assert!((quintic_smoothstep(t) - expanded).abs() < 1e-5);
        }
    }

    #[test]
    fn test_identity() {
        assert_eq!(identity(0.25), 0.25);
        assert_eq!(identity(-3.0), -3.0);
    }
}
