//! Pure helpers turning raw DOM event fields into viewer input.

use pack_core::DragMode;

pub const BUTTON_PRIMARY: i16 = 0;
pub const BUTTON_MIDDLE: i16 = 1;
pub const BUTTON_SECONDARY: i16 = 2;

/// Primary drags orbit, shift+primary or secondary/middle drags pan.
pub fn drag_mode_for(button: i16, shift: bool) -> Option<DragMode> {
    match button {
        BUTTON_PRIMARY if shift => Some(DragMode::Pan),
        BUTTON_PRIMARY => Some(DragMode::Rotate),
        BUTTON_MIDDLE | BUTTON_SECONDARY => Some(DragMode::Pan),
        _ => None,
    }
}

/// Normalise a wheel delta to pixels whatever `deltaMode` the browser used.
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, line_px: f32, page_px: f32) -> f32 {
    let dy = delta_y as f32;
    match delta_mode {
        1 => dy * line_px,
        2 => dy * page_px,
        _ => dy,
    }
}

/// A page entering the back/forward cache (`persisted`) may be restored, so
/// only a real unload tears the viewer down.
pub fn teardown_on_pagehide(persisted: bool) -> bool {
    !persisted
}

/// Text written back into a range input after an orbit gesture.
pub fn slider_text(value: f32) -> String {
    let tenths = (value * 10.0).round() / 10.0;
    format!("{}", tenths + 0.0)
}
