//! The view callback, i.e. "draw loop".

use super::*;

/// The app's view callback (AKA "draw loop").
pub fn view(app: &App, model: &Model, frame: Frame) {
    frame.clear(BLACK);
    let frame = &frame;
    let draw = &app.draw();

    model.level_slider.draw(draw);

    _ = draw.to_frame(app, frame);
}
