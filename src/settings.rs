//! Global constants.

/// The sample rate requested for the output stream, in hertz. Informational
/// only; none of the signal generation depends on it (see
/// [`RAMP_LENGTH_SAMPLES`]).
pub const SAMPLE_RATE: f64 = 44100.0;

/// The number of audio channels for the application.
pub const NUM_CHANNELS: usize = 2;

/// The number of frames per device buffer.
pub const BUFFER_SIZE: usize = 256;

/// The duration of a level ramp, as a number of samples.
///
/// This is a fixed sample count, so the wall-clock duration of a ramp varies
/// with the device sample rate. [`GainRamp::length_for_rate`] can derive a
/// rate-aware count if that ever becomes a problem.
///
/// [`GainRamp::length_for_rate`]: crate::dsp::GainRamp::length_for_rate
pub const RAMP_LENGTH_SAMPLES: u32 = 128;

/// The upper bound of the output level range. The slider clamps to this
/// before making a request.
pub const MAX_LEVEL: f64 = 0.25;

/// The output level at startup.
pub const DEFAULT_LEVEL: f64 = 0.125;

/// A convenience struct to allow `WINDOW_SIZE` to have `x` and `y` fields.
pub struct V2 {
    pub x: f64,
    pub y: f64,
}

/// The size of the application's window in display units.
pub const WINDOW_SIZE: V2 = V2 { x: 800.0, y: 600.0 };
