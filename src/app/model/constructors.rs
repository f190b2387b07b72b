//! App constructors.

use super::*;
use crate::dsp::NoiseGenerator;
use anyhow::anyhow;
use nannou_audio::cpal::BufferSize;

/// Builds the app window.
pub fn build_window(app: &App, width: u32, height: u32) -> Id {
    app.new_window()
        .size(width, height)
        .resizable(false)
        .msaa_samples(1)
        .mouse_pressed(mouse::mouse_pressed)
        .mouse_moved(mouse::mouse_moved)
        .mouse_released(mouse::mouse_released)
        .view(view::view)
        .title("hiss")
        .build()
        .expect("failed to build app window!")
}

pub struct AudioSystem {
    pub(super) stream: Stream<AudioModel>,
    pub(super) level_control: Arc<LevelControl>,
}

/// Builds the output audio stream and the level-control handle shared with
/// it.
pub fn build_audio_system() -> anyhow::Result<AudioSystem> {
    let audio_host = nannou_audio::Host::new();

    let mut generator =
        NoiseGenerator::new(DEFAULT_LEVEL, RAMP_LENGTH_SAMPLES);
    // start steady at the displayed level rather than ramping up from
    // silence
    generator.reset(DEFAULT_LEVEL);
    let level_control = generator.control();

    let stream = audio_host
        .new_output_stream(AudioModel::new(generator))
        .render(audio::process)
        .channels(NUM_CHANNELS)
        .sample_rate(SAMPLE_RATE as u32)
        .frames_per_buffer(BUFFER_SIZE)
        .build()
        .map_err(|e| anyhow!("failed to build the output stream: {e}"))?;

    // report what the device actually negotiated, not what was requested
    let config = stream.cpal_config();
    let frames_per_buffer = match config.buffer_size {
        BufferSize::Fixed(frames) => frames.to_string(),
        BufferSize::Default => String::from("default"),
    };
    info!(
        "preparing to play: sample rate {} Hz, {} frames per buffer, {} \
         channels",
        config.sample_rate.0, frames_per_buffer, config.channels
    );

    stream
        .play()
        .map_err(|e| anyhow!("failed to start the output stream: {e}"))?;

    Ok(AudioSystem { stream, level_control })
}
