//! Audio processing callback.

use super::AudioModel;
use nannou_audio::Buffer;

/// The main audio processing callback. Fills the whole interleaved device
/// buffer with gain-scaled noise; any level request made since the previous
/// callback is picked up at the top of the buffer.
pub fn process(audio: &mut AudioModel, buffer: &mut Buffer<f64>) {
    let num_channels = buffer.channels();
    audio.generator.fill_interleaved(&mut buffer[..], num_channels);
}
