//! The on-screen control surface.

use super::*;

/// Pixels of extra hit area around the slider track, so the handle is easy
/// to grab.
const HIT_PADDING: f32 = 10.0;

type ChangeCallback = Box<dyn Fn(f64)>;

/// A horizontal slider mapped over a level range.
///
/// The slider owns no audio state. It holds a single registered `on_change`
/// callback, invoked synchronously on the UI thread whenever the handle
/// moves; the model points that callback at
/// [`LevelControl::request`](crate::dsp::LevelControl::request). Values are
/// clamped to the slider's range before the callback fires, so the audio
/// side never sees an out-of-range request from here.
pub struct LevelSlider {
    rect: Rect,
    min: f64,
    max: f64,
    value: f64,
    dragging: bool,
    on_change: Option<ChangeCallback>,
}

impl LevelSlider {
    /// Creates a slider over `[min, max]` with no callback registered.
    pub fn new(rect: Rect, initial_value: f64, min: f64, max: f64) -> Self {
        Self {
            rect,
            min,
            max,
            value: initial_value.clamp(min, max),
            dragging: false,
            on_change: None,
        }
    }

    /// Registers the slider's change callback.
    pub fn on_change<F: Fn(f64) + 'static>(mut self, callback: F) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// The slider's displayed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Follows a value that changed somewhere other than this slider,
    /// without firing the callback. Ignored mid-drag.
    pub fn sync_value(&mut self, value: f64) {
        if !self.dragging {
            self.value = value.clamp(self.min, self.max);
        }
    }

    /// Grabs the handle if `position` lands on the track.
    pub fn mouse_pressed(&mut self, position: Point2) {
        if self.rect.pad(-HIT_PADDING).contains(position) {
            self.dragging = true;
            self.drag_to(position.x);
        }
    }

    pub fn mouse_moved(&mut self, position: Point2) {
        if self.dragging {
            self.drag_to(position.x);
        }
    }

    pub fn mouse_released(&mut self) {
        self.dragging = false;
    }

    /// Draws the track, fill, handle and value readout.
    pub fn draw(&self, draw: &Draw) {
        let rect = self.rect;
        let t = normalize(self.value, self.min, self.max) as f32;

        // track
        draw.rect()
            .xy(rect.xy())
            .wh(rect.wh())
            .color(DARKSLATEGRAY);

        // filled portion
        let fill_w = rect.w() * t;
        if fill_w > 0.0 {
            draw.rect()
                .x_y(rect.left() + fill_w * 0.5, rect.y())
                .w_h(fill_w, rect.h())
                .color(GRAY);
        }

        // handle
        draw.rect()
            .x_y(rect.left() + rect.w() * t, rect.y())
            .w_h(4.0, rect.h() + 8.0)
            .color(WHITE);

        draw.text(&format!("level: {:.3}", self.value))
            .x_y(rect.x(), rect.top() + 24.0)
            .color(WHITE);
    }

    /// Moves the handle to window coordinate `x`, clamps, and fires the
    /// callback.
    fn drag_to(&mut self, x: f32) {
        let t = <f64 as From<f32>>::from((x - self.rect.left()) / self.rect.w());
        self.value = scale(t.clamp(0.0, 1.0), self.min, self.max);

        if let Some(callback) = &self.on_change {
            callback(self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // 400px track over [0.0, 0.25], starting at 0.125, with the callback
    // recording the last requested level
    fn test_slider() -> (LevelSlider, Rc<Cell<f64>>) {
        let requested = Rc::new(Cell::new(f64::NAN));
        let requested_ref = Rc::clone(&requested);

        let slider = LevelSlider::new(
            Rect::from_x_y_w_h(0.0, 0.0, 400.0, 20.0),
            0.125,
            0.0,
            0.25,
        )
        .on_change(move |level| requested_ref.set(level));

        (slider, requested)
    }

    #[test]
    fn test_drag_updates_value_and_fires_callback() {
        let (mut slider, requested) = test_slider();
        assert_eq!(slider.value(), 0.125);

        // centre of the track maps to the middle of the range
        slider.mouse_pressed(pt2(0.0, 0.0));
        assert!(within_tolerance(slider.value(), 0.125, 1e-9));
        assert!(within_tolerance(requested.get(), 0.125, 1e-9));

        // right edge of the track
        slider.mouse_moved(pt2(200.0, 0.0));
        assert!(within_tolerance(slider.value(), 0.25, 1e-9));
        assert!(within_tolerance(requested.get(), 0.25, 1e-9));
    }

    #[test]
    fn test_drag_clamps_to_range() {
        let (mut slider, requested) = test_slider();
        slider.mouse_pressed(pt2(0.0, 0.0));

        slider.mouse_moved(pt2(1000.0, 0.0));
        assert_eq!(slider.value(), 0.25);
        assert_eq!(requested.get(), 0.25);

        slider.mouse_moved(pt2(-1000.0, 0.0));
        assert_eq!(slider.value(), 0.0);
        assert_eq!(requested.get(), 0.0);
    }

    #[test]
    fn test_press_off_the_track_is_ignored() {
        let (mut slider, requested) = test_slider();

        slider.mouse_pressed(pt2(0.0, 300.0));
        slider.mouse_moved(pt2(100.0, 300.0));

        assert_eq!(slider.value(), 0.125);
        assert!(requested.get().is_nan());
    }

    #[test]
    fn test_sync_value_ignored_mid_drag() {
        let (mut slider, _requested) = test_slider();

        slider.mouse_pressed(pt2(0.0, 0.0));
        slider.sync_value(0.2);
        assert!(within_tolerance(slider.value(), 0.125, 1e-9));

        slider.mouse_released();
        slider.sync_value(0.2);
        assert_eq!(slider.value(), 0.2);
    }
}
