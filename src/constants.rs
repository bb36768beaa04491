// DOM wiring and page-level constants for the web front-end.

/// Canvas the renderer attaches to.
pub const CANVAS_ID: &str = "app-canvas";
/// Attribute on the canvas that overrides the audio asset path.
pub const AUDIO_SRC_ATTR: &str = "data-audio-src";

pub const PLAY_BUTTON_ID: &str = "play-button";
pub const PLAY_BUTTON_STYLE: &str =
    "position: fixed; top: 20px; left: 20px; z-index: 1000; padding: 10px; cursor: pointer;";

pub const STATUS_ID: &str = "audio-status";
pub const STATUS_STYLE: &str =
    "position: fixed; top: 20px; left: 20px; z-index: 1000; padding: 10px; color: #bbb; font-family: sans-serif;";
pub const STATUS_UNAVAILABLE: &str = "Audio unavailable";

/// Key that toggles playback once audio is ready.
pub const TOGGLE_KEY: &str = " ";

// Wheel deltas arrive in pixels, lines or pages depending on the device.
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;

pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
pub const MSAA_SAMPLES: u32 = 4;
