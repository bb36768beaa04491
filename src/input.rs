// Pointer and wheel helpers with no DOM types in their signatures.

use crate::constants::{WHEEL_LINE_PX, WHEEL_PAGE_PX};

/// WheelEvent.deltaMode values.
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Wheel delta in pixels regardless of the event's delta mode.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let scale = match delta_mode {
        DOM_DELTA_PIXEL => 1.0,
        DOM_DELTA_LINE => WHEEL_LINE_PX,
        DOM_DELTA_PAGE => WHEEL_PAGE_PX,
        _ => 1.0,
    };
    delta_y as f32 * scale
}

/// Map a client-space point into canvas backing pixels.
///
/// `rect` is the canvas bounding rect as `(left, top, width, height)` in CSS
/// pixels; `backing` is the canvas width/height attributes.
#[inline]
pub fn client_to_canvas_px(
    client: (f32, f32),
    rect: (f32, f32, f32, f32),
    backing: (u32, u32),
) -> (f32, f32) {
    let (left, top, width, height) = rect;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let sx = (client.0 - left) / width * backing.0 as f32;
    let sy = (client.1 - top) / height * backing.1 as f32;
    (sx, sy)
}

/// Backing-store size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}

#[inline]
pub fn is_toggle_key(key: &str) -> bool {
    key == crate::constants::TOGGLE_KEY
}
