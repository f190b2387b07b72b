//! White noise generation with a ramped gain envelope.

use super::{GainRamp, LevelControl, NoiseOsc};
use std::sync::Arc;

/// Fills output buffers with white noise scaled by a [`GainRamp`].
///
/// The generator is owned and driven by the audio-rendering context; it
/// performs no I/O, allocation, or locking, so it is safe inside a device
/// callback and trivially testable without one. Level changes arrive through
/// a shared [`LevelControl`] handle and are picked up once per fill call, at
/// the start of the buffer.
///
/// The gain envelope advances once per sample index and is shared by all
/// channels; the noise itself is drawn independently per channel, so stereo
/// output is uncorrelated.
pub struct NoiseGenerator {
    ramp: GainRamp,
    control: Arc<LevelControl>,
    seen_epoch: u64,
}

impl NoiseGenerator {
    /// Returns a new `NoiseGenerator`, steady at `initial_level`.
    pub fn new(initial_level: f64, ramp_length_samples: u32) -> Self {
        let control = Arc::new(LevelControl::new(initial_level));
        let seen_epoch = control.epoch();

        Self {
            ramp: GainRamp::new(initial_level, ramp_length_samples),
            control,
            seen_epoch,
        }
    }

    /// Returns the shared handle used to request level changes from other
    /// threads (the control surface holds one of these).
    pub fn control(&self) -> Arc<LevelControl> {
        Arc::clone(&self.control)
    }

    /// Requests a new target level, ramping from wherever the gain currently
    /// sits. Takes effect at the next fill call. The value is passed through
    /// unvalidated.
    pub fn request_level(&self, new_target: f64) {
        self.control.request(new_target);
    }

    /// Jumps the gain straight to `level`, discarding any ramp in progress
    /// and any pending request. Used at stream start so playback begins at
    /// the displayed level instead of ramping up from silence.
    pub fn reset(&mut self, level: f64) {
        self.control.request(level);
        self.seen_epoch = self.control.epoch();
        self.ramp.reset(level);
    }

    /// Fills the first `sample_count` entries of every channel buffer with
    /// gain-scaled noise, advancing the ramp by `sample_count` samples.
    ///
    /// Every channel buffer must be at least `sample_count` long. A zero
    /// `sample_count` or an empty channel set is a no-op; the ramp state is
    /// left untouched and no pending request is consumed.
    pub fn fill_buffer(
        &mut self,
        channels: &mut [&mut [f64]],
        sample_count: usize,
    ) {
        if sample_count == 0 || channels.is_empty() {
            return;
        }

        self.apply_pending_request();

        for sample_idx in 0..sample_count {
            let gain = self.ramp.next();

            for channel in channels.iter_mut() {
                channel[sample_idx] = NoiseOsc::process() * gain;
            }
        }
    }

    /// [`fill_buffer`][Self::fill_buffer] for interleaved device buffers,
    /// the layout `nannou_audio` hands the render callback. The gain
    /// advances once per frame.
    pub fn fill_interleaved(
        &mut self,
        samples: &mut [f64],
        num_channels: usize,
    ) {
        if samples.is_empty() || num_channels == 0 {
            return;
        }

        self.apply_pending_request();

        for frame in samples.chunks_mut(num_channels) {
            let gain = self.ramp.next();

            for sample in frame.iter_mut() {
                *sample = NoiseOsc::process() * gain;
            }
        }
    }

    /// The gain being applied right now.
    pub fn current_level(&self) -> f64 {
        self.ramp.current_level()
    }

    /// The level the gain is ramping toward.
    pub fn target_level(&self) -> f64 {
        self.ramp.target_level()
    }

    /// Samples left before the current ramp completes.
    pub fn remaining_ramp_samples(&self) -> u32 {
        self.ramp.remaining_samples()
    }

    /// Picks up a pending level request, if one has landed since the last
    /// fill. Restarts the ramp even if the requested value matches the
    /// current target.
    fn apply_pending_request(&mut self) {
        if let Some(target) = self.control.poll(&mut self.seen_epoch) {
            self.ramp.set_target(target);
        }
    }
}
