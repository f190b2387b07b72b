//! The update callback, for mutating state each frame. Not for drawing.

use super::*;

/// The app's update callback for updating state. Keeps the slider display
/// in step with the shared target level.
pub fn update(_app: &App, model: &mut Model, _update: Update) {
    model.level_slider.sync_value(model.level_control.target());
}
