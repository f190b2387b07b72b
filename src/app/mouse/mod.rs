//! Window mouse handlers, which drive the level slider.

use super::*;

pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if matches!(button, MouseButton::Left) {
        model.level_slider.mouse_pressed(app.mouse.position());
    }
}

pub fn mouse_moved(_app: &App, model: &mut Model, position: Point2) {
    model.level_slider.mouse_moved(position);
}

pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if matches!(button, MouseButton::Left) {
        model.level_slider.mouse_released();
    }
}
