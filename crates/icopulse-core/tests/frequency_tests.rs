// Host-side tests for the frequency model.

use icopulse_core::*;

struct Fixed(f32);

impl FrequencySource for Fixed {
    fn average_magnitude(&mut self) -> f32 {
        self.0
    }
}

#[test]
fn idle_value_never_drops_below_floor() {
    // Sweep a wide range including negative and very large times.
    let mut t = -1000.0_f32;
    while t < 1000.0 {
        assert!(idle_frequency(t) >= MIN_IDLE_FREQUENCY, "t={t}");
        t += 0.037;
    }
    for t in [f32::MIN_POSITIVE, 1e6, -1e6, 3.0 * std::f32::consts::FRAC_PI_2] {
        assert!(idle_frequency(t) >= MIN_IDLE_FREQUENCY);
    }
}

#[test]
fn idle_value_is_clamped_at_the_trough() {
    // sin = -1 gives 15 - 9 = 6, lifted to the floor
    let trough = idle_frequency(-std::f32::consts::FRAC_PI_2);
    assert_eq!(trough, MIN_IDLE_FREQUENCY);
}

#[test]
fn idle_value_follows_sine_above_floor() {
    assert!((idle_frequency(0.0) - IDLE_FREQUENCY).abs() < 1e-6);
    let t = 0.3_f32;
    let expected = IDLE_FREQUENCY + t.sin() * IDLE_FREQUENCY_VARIATION;
    assert!((idle_frequency(t) - expected).abs() < 1e-5);
}

#[test]
fn active_mode_reads_the_analyser_unfiltered() {
    let mut src = Fixed(87.25);
    assert_eq!(sample_frequency(Mode::Active, 12.0, &mut src), 87.25);
    let mut silent = Fixed(0.0);
    assert_eq!(sample_frequency(Mode::Active, 12.0, &mut silent), 0.0);
}

#[test]
fn idle_mode_ignores_the_analyser() {
    let mut src = Fixed(200.0);
    assert_eq!(sample_frequency(Mode::Idle, 0.0, &mut src), idle_frequency(0.0));
}

#[test]
fn average_magnitude_of_byte_bins() {
    assert_eq!(average_magnitude(&[10, 20, 30, 40]), 25.0);
    assert_eq!(average_magnitude(&[255; 16]), 255.0);
    assert_eq!(average_magnitude(&[0; 16]), 0.0);
}
