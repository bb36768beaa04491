use crate::constants::{IDLE_FREQUENCY, IDLE_FREQUENCY_VARIATION, MIN_IDLE_FREQUENCY};

/// Which signal drives the frequency uniform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Synthesized oscillation; orbit controls are live.
    Idle,
    /// Sampled from the audio analyser; camera is locked.
    Active,
}

/// Live audio energy, sampled once per active frame.
pub trait FrequencySource {
    /// Mean magnitude of the most recent frequency-domain window.
    fn average_magnitude(&mut self) -> f32;
}

/// Idle value: `max(MIN, BASE + sin(t) * VARIATION)`.
#[inline]
pub fn idle_frequency(elapsed_sec: f32) -> f32 {
    (IDLE_FREQUENCY + elapsed_sec.sin() * IDLE_FREQUENCY_VARIATION).max(MIN_IDLE_FREQUENCY)
}

/// Mean of analyser byte bins (0..=255). Empty windows read as silence.
#[inline]
pub fn average_magnitude(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32
}

/// Frequency uniform value for the given mode.
pub fn sample_frequency(mode: Mode, elapsed_sec: f32, source: &mut dyn FrequencySource) -> f32 {
    match mode {
        Mode::Idle => idle_frequency(elapsed_sec),
        Mode::Active => source.average_magnitude(),
    }
}
