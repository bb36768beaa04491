// Host-side tests for page constants and their relationship to the core defaults.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use icopulse_core::{PLAY_LABEL, PAUSE_LABEL};

#[test]
fn button_sits_top_left_above_the_canvas() {
    for rule in ["position: fixed", "top: 20px", "left: 20px", "z-index: 1000", "padding: 10px", "cursor: pointer"] {
        assert!(PLAY_BUTTON_STYLE.contains(rule), "missing `{}`", rule);
    }
}

#[test]
fn status_notice_occupies_the_button_slot() {
    assert!(STATUS_STYLE.contains("top: 20px"));
    assert!(STATUS_STYLE.contains("left: 20px"));
    assert!(!STATUS_UNAVAILABLE.is_empty());
    assert_ne!(STATUS_ID, PLAY_BUTTON_ID);
}

#[test]
fn labels_are_distinct() {
    assert_ne!(PLAY_LABEL, PAUSE_LABEL);
    assert!(PLAY_LABEL.ends_with("Play"));
    assert!(PAUSE_LABEL.ends_with("Pause"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_constants_are_sane() {
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(WHEEL_LINE_PX > 0.0 && WHEEL_PAGE_PX > WHEEL_LINE_PX);
}

#[test]
fn audio_override_attribute_is_a_data_attribute() {
    assert!(AUDIO_SRC_ATTR.starts_with("data-"));
}
