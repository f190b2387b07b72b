//! Signal generation.

/// Linear gain ramping and the shared level-request handle.
pub mod gain;
/// The noise generator driven by the audio callback.
pub mod generator;
/// Primitive white noise oscillator.
pub mod noise;

pub use gain::{GainRamp, LevelControl};
pub use generator::NoiseGenerator;
pub use noise::NoiseOsc;
