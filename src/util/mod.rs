//! Global utility functions — these are publicly re-exported in `prelude.rs`.

pub mod atomic_ops;

pub use atomic_ops::AtomicOps;

/// Scales a value to a provided range, assuming it is normalised.
#[inline]
pub fn scale(value: f64, min: f64, max: f64) -> f64 {
    value.mul_add(max - min, min)
}

/// Normalizes a value from a provided range.
#[inline]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Returns whether `value` is within `tolerance` of `target`.
#[inline]
pub fn within_tolerance(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_mapping() {
        let level = scale(0.5, 0.0, 0.25);
        assert!(within_tolerance(level, 0.125, f64::EPSILON));
        assert!(within_tolerance(
            normalize(level, 0.0, 0.25),
            0.5,
            f64::EPSILON
        ));
    }
}
