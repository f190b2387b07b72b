//! The whole app's state.

use super::audio::AudioModel;
use super::gui::LevelSlider;
use super::*;
use crate::dsp::LevelControl;
use nannou::prelude::WindowId as Id;
use nannou_audio::Stream;
use std::sync::Arc;

mod constructors;
use constructors::*;

/// The app's model, i.e. its state.
pub struct Model {
    window: Id,

    /// The output audio stream.
    pub audio_stream: Stream<AudioModel>,
    /// Shared handle for sending level requests to the audio thread.
    pub level_control: Arc<LevelControl>,
    /// The on-screen output level control.
    pub level_slider: LevelSlider,
}

impl Model {
    /// Builds the app's `Model`.
    ///
    /// # Panics
    ///
    /// Panics if the audio system or the window cannot be initialized.
    pub fn build(app: &App) -> Self {
        let AudioSystem { stream, level_control } = build_audio_system()
            .expect("failed to build the audio system!");

        let window =
            build_window(app, WINDOW_SIZE.x as u32, WINDOW_SIZE.y as u32);

        let slider_rect = Rect::from_x_y_w_h(0.0, 0.0, 400.0, 20.0);
        let control = Arc::clone(&level_control);
        let level_slider =
            LevelSlider::new(slider_rect, level_control.target(), 0.0, MAX_LEVEL)
                .on_change(move |level| control.request(level));

        Self {
            window,
            audio_stream: stream,
            level_control,
            level_slider,
        }
    }
}
