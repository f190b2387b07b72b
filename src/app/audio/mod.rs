//! Audio state and processing.

use super::*;
use crate::dsp::NoiseGenerator;

pub mod process;

pub use process::process;

/// The state owned by the audio-rendering thread.
pub struct AudioModel {
    /// The noise generator which fills every output buffer.
    pub generator: NoiseGenerator,
}

impl AudioModel {
    pub fn new(generator: NoiseGenerator) -> Self {
        Self { generator }
    }
}

impl Drop for AudioModel {
    fn drop(&mut self) {
        info!("releasing audio resources");
    }
}
