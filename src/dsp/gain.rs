//! Linear gain ramping, plus the lock-free handle used to request level
//! changes from outside the audio thread.

use crate::prelude::*;
use std::sync::atomic::{
    AtomicU64,
    Ordering::{Acquire, Release},
};

/// A linear gain segment generator.
///
/// The ramp moves `current_level` toward `target_level` over a fixed number
/// of samples, one step per [`next()`][Self::next] call. Retargeting always
/// restarts the full ramp from the live current level, so a mid-ramp change
/// never jumps. When the last step is consumed the current level snaps to the
/// target exactly, so repeated ramps cannot accumulate floating-point error.
///
/// Not thread-safe on its own; cross-thread requests go through
/// [`LevelControl`].
#[derive(Debug, Clone)]
pub struct GainRamp {
    current_level: f64,
    target_level: f64,
    remaining_ramp_samples: u32,
    ramp_length_samples: u32,
}

impl GainRamp {
    /// Returns a new `GainRamp`, steady at `initial_level`.
    pub fn new(initial_level: f64, ramp_length_samples: u32) -> Self {
        Self {
            current_level: initial_level,
            target_level: initial_level,
            remaining_ramp_samples: 0,
            ramp_length_samples,
        }
    }

    /// Jumps straight to `level` with no transition: both the current and
    /// target levels are set, and any ramp in progress is discarded. Used at
    /// stream start to avoid an audible ramp up from silence.
    pub fn reset(&mut self, level: f64) {
        self.current_level = level;
        self.target_level = level;
        self.remaining_ramp_samples = 0;
    }

    /// Starts a full-length ramp from the current level toward
    /// `target_level`. A ramp already in progress is discarded; the latest
    /// target wins. Values are passed through unvalidated, and callers clamp
    /// to their own range.
    ///
    /// A ramp length of zero applies the target immediately.
    pub fn set_target(&mut self, target_level: f64) {
        self.target_level = target_level;

        if self.ramp_length_samples == 0 {
            self.current_level = target_level;
            self.remaining_ramp_samples = 0;
        }
        else {
            self.remaining_ramp_samples = self.ramp_length_samples;
        }
    }

    /// Yields the gain for the current sample, then advances the ramp by one
    /// sample. The returned value is the level *before* the step is applied.
    pub fn next(&mut self) -> f64 {
        if self.remaining_ramp_samples == 0 {
            return self.current_level;
        }

        let step = (self.target_level - self.current_level)
            / f64::from(self.remaining_ramp_samples);

        let gain = self.current_level;
        self.current_level += step;
        self.remaining_ramp_samples -= 1;

        // snap to the target when the ramp completes so float error cannot
        // leave a residual offset
        if self.remaining_ramp_samples == 0 {
            self.current_level = self.target_level;
        }

        gain
    }

    /// The gain being applied right now.
    pub fn current_level(&self) -> f64 {
        self.current_level
    }

    /// The level the ramp is moving toward.
    pub fn target_level(&self) -> f64 {
        self.target_level
    }

    /// The number of samples left until the target is reached.
    pub fn remaining_samples(&self) -> u32 {
        self.remaining_ramp_samples
    }

    /// Whether a ramp is in progress.
    pub fn is_ramping(&self) -> bool {
        self.remaining_ramp_samples > 0
    }

    /// Derives a ramp length from a duration in milliseconds and a sample
    /// rate. The app deliberately does *not* use this by default: ramps are
    /// a fixed sample count regardless of rate (see
    /// [`RAMP_LENGTH_SAMPLES`]), so their wall-clock duration varies with
    /// the device.
    ///
    /// [`RAMP_LENGTH_SAMPLES`]: crate::settings::RAMP_LENGTH_SAMPLES
    pub fn length_for_rate(duration_ms: f64, sample_rate: f64) -> u32 {
        (sample_rate * duration_ms / 1000.0).round() as u32
    }
}

/// Cross-thread level requests, shared between the UI and the audio thread.
///
/// Single writer (the control surface), single reader (the renderer). Each
/// request bumps an epoch counter with Release ordering after storing the
/// target, so a renderer that Acquires the epoch always sees the matching
/// target, so the pair cannot tear. Counting requests (rather than comparing
/// values) also means a re-request of the identical level still restarts the
/// ramp.
///
/// Nothing here blocks or allocates, so the renderer can poll once per
/// buffer without risking its deadline.
#[derive(Debug, Default)]
pub struct LevelControl {
    target: AtomicF64,
    epoch: AtomicU64,
}

impl LevelControl {
    /// Returns a new `LevelControl` holding `level`, with no request
    /// pending.
    pub fn new(level: f64) -> Self {
        Self {
            target: AtomicF64::new(level),
            epoch: AtomicU64::new(0),
        }
    }

    /// Requests a new target level. May be called from any thread; the
    /// renderer picks the request up at its next buffer. The latest request
    /// wins.
    pub fn request(&self, level: f64) {
        self.target.sr(level);
        self.epoch.fetch_add(1, Release);
        debug!("requested output level {level}");
    }

    /// The most recently requested level. Used by the UI for its initial
    /// display.
    pub fn target(&self) -> f64 {
        self.target.lr()
    }

    /// The current request count. A renderer seeds its own counter with this
    /// before it starts polling.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Acquire)
    }

    /// Renderer-side pickup: returns the requested target if any request
    /// landed since `seen`, updating `seen` to match. Returns `None` when
    /// nothing changed.
    pub fn poll(&self, seen: &mut u64) -> Option<f64> {
        let epoch = self.epoch.load(Acquire);
        if epoch == *seen {
            return None;
        }

        *seen = epoch;
        Some(self.target.lr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_state() {
        let mut ramp = GainRamp::new(0.2, 100);
        assert!(!ramp.is_ramping());

        for _ in 0..300 {
            assert_eq!(ramp.next(), 0.2);
        }
        assert_eq!(ramp.current_level(), 0.2);
        assert_eq!(ramp.remaining_samples(), 0);
    }

    #[test]
    fn test_ramp_completion_is_exact() {
        let mut ramp = GainRamp::new(0.0, 100);
        ramp.set_target(0.2);
        assert_eq!(ramp.remaining_samples(), 100);

        let mut previous = -1.0;
        for _ in 0..100 {
            let gain = ramp.next();
            assert!(gain > previous);
            previous = gain;
        }

        // exactly the target, no float drift
        assert_eq!(ramp.current_level(), 0.2);
        assert_eq!(ramp.remaining_samples(), 0);
        assert!(!ramp.is_ramping());
        assert_eq!(ramp.next(), 0.2);
    }

    #[test]
    fn test_restart_mid_ramp() {
        let mut ramp = GainRamp::new(0.0, 100);
        ramp.set_target(0.2);

        for _ in 0..40 {
            ramp.next();
        }
        assert!(within_tolerance(ramp.current_level(), 0.08, 1e-12));

        // retargeting restarts the full ramp from the live level
        ramp.set_target(0.1);
        assert_eq!(ramp.remaining_samples(), 100);
        assert!(within_tolerance(ramp.next(), 0.08, 1e-12));

        for _ in 0..99 {
            ramp.next();
        }
        assert_eq!(ramp.current_level(), 0.1);
    }

    #[test]
    fn test_retarget_while_steady() {
        let mut ramp = GainRamp::new(0.1, 64);
        ramp.set_target(0.1);
        assert_eq!(ramp.remaining_samples(), 64);
        assert!(ramp.is_ramping());
    }

    #[test]
    fn test_zero_length_ramp() {
        let mut ramp = GainRamp::new(0.0, 0);
        ramp.set_target(0.25);
        assert_eq!(ramp.current_level(), 0.25);
        assert_eq!(ramp.remaining_samples(), 0);
        assert_eq!(ramp.next(), 0.25);
    }

    #[test]
    fn test_completion_independent_of_partitioning() {
        let mut a = GainRamp::new(0.0, 100);
        let mut b = GainRamp::new(0.0, 100);
        a.set_target(0.2);
        b.set_target(0.2);

        for _ in 0..100 {
            a.next();
        }
        for chunk in [7, 23, 41, 29] {
            for _ in 0..chunk {
                b.next();
            }
        }

        assert_eq!(a.current_level(), b.current_level());
        assert_eq!(b.current_level(), 0.2);
    }

    #[test]
    fn test_reset_discards_ramp() {
        let mut ramp = GainRamp::new(0.0, 100);
        ramp.set_target(0.2);
        for _ in 0..10 {
            ramp.next();
        }

        ramp.reset(0.125);
        assert_eq!(ramp.current_level(), 0.125);
        assert_eq!(ramp.target_level(), 0.125);
        assert!(!ramp.is_ramping());
    }

    #[test]
    fn test_level_control_pairing() {
        let control = LevelControl::new(0.125);
        let mut seen = control.epoch();

        assert_eq!(control.target(), 0.125);
        assert!(control.poll(&mut seen).is_none());

        control.request(0.2);
        assert_eq!(control.poll(&mut seen), Some(0.2));
        assert!(control.poll(&mut seen).is_none());

        // latest request wins
        control.request(0.1);
        control.request(0.05);
        assert_eq!(control.poll(&mut seen), Some(0.05));
    }

    #[test]
    fn test_level_control_same_value_counts() {
        let control = LevelControl::new(0.1);
        let mut seen = control.epoch();

        // a re-request of the identical value is still a request
        control.request(0.1);
        assert_eq!(control.poll(&mut seen), Some(0.1));
    }

    #[test]
    fn test_length_for_rate() {
        assert_eq!(GainRamp::length_for_rate(10.0, 44100.0), 441);
        assert_eq!(GainRamp::length_for_rate(0.0, 48000.0), 0);
    }
}
