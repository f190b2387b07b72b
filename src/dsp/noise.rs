//! Primitive white noise oscillator.

/// A white noise oscillator.
#[derive(Debug, Clone, Copy)]
pub struct NoiseOsc;

impl NoiseOsc {
    /// Produces a single noise sample at 0.0 dBFS, uniformly distributed
    /// over `[-1.0, 1.0]`. Each call draws independently, so consecutive
    /// samples and parallel channels are uncorrelated.
    pub fn process() -> f64 {
        rand::random::<f64>().mul_add(2.0, -1.0)
    }
}
