// Host-side tests for the colour cycle.

use icopulse_core::*;

fn approx(a: Rgb, b: Rgb, eps: f32) -> bool {
    (a.r - b.r).abs() < eps && (a.g - b.g).abs() < eps && (a.b - b.b).abs() < eps
}

#[test]
fn sample_at_zero_progress_is_current_colour() {
    let cycle = ColorCycle::default();
    assert_eq!(cycle.progress(), 0.0);
    assert_eq!(cycle.sample(), Rgb::from(PALETTE[0]));
}

#[test]
fn sample_approaches_next_colour_just_below_one() {
    let mut cycle = ColorCycle::default();
    // 0.5 + 0.25 + 0.125 + ... stays exactly representable and below 1
    let mut step = 0.5;
    for _ in 0..20 {
        cycle.advance(step);
        step *= 0.5;
    }
    assert!(cycle.progress() < 1.0);
    assert_eq!(cycle.indices(), (0, 1));
    assert!(approx(cycle.sample(), Rgb::from(PALETTE[1]), 1e-4));
}

#[test]
fn sample_is_per_channel_lerp() {
    let mut cycle = ColorCycle::default();
    cycle.advance(0.25);
    let a = Rgb::from(PALETTE[0]);
    let b = Rgb::from(PALETTE[1]);
    let expected = Rgb::new(
        a.r + (b.r - a.r) * 0.25,
        a.g + (b.g - a.g) * 0.25,
        a.b + (b.b - a.b) * 0.25,
    );
    assert!(approx(cycle.sample(), expected, 1e-6));
}

#[test]
fn overflow_resets_progress_and_rotates_indices() {
    let mut cycle = ColorCycle::default();
    for _ in 0..4 {
        cycle.advance(0.25);
    }
    assert_eq!(cycle.progress(), 0.0);
    assert_eq!(cycle.indices(), (1, 2));
    assert_eq!(cycle.sample(), Rgb::from(PALETTE[1]));

    for _ in 0..4 {
        cycle.advance(0.25);
    }
    assert_eq!(cycle.indices(), (2, 0));
    for _ in 0..4 {
        cycle.advance(0.25);
    }
    assert_eq!(cycle.indices(), (0, 1), "wraps circularly through 3 entries");
}

#[test]
fn wrap_count_matches_exact_speeds() {
    // Power-of-two speeds accumulate exactly, so wraps = floor(n * s).
    for &speed in &[0.5_f32, 0.25, 0.125, 0.0625, 0.03125] {
        let steps_per_wrap = (1.0 / speed) as usize;
        for n in [1usize, 7, 31, 100, 257] {
            let mut cycle = ColorCycle::default();
            for _ in 0..n {
                cycle.advance(speed);
            }
            let wraps = n / steps_per_wrap;
            let current = wraps % 3;
            assert_eq!(
                cycle.indices(),
                (current, (current + 1) % 3),
                "speed {speed} after {n} advances"
            );
            let expected_progress = (n % steps_per_wrap) as f32 * speed;
            assert_eq!(cycle.progress(), expected_progress);
        }
    }
}

#[test]
fn progress_stays_in_unit_interval_for_arbitrary_speeds() {
    for &speed in &[0.005_f32, 0.013, 0.1, 0.3, 0.77, 0.999] {
        let mut cycle = ColorCycle::default();
        let mut wraps = 0usize;
        let mut prev = cycle.indices();
        for n in 1..=2000usize {
            cycle.advance(speed);
            let p = cycle.progress();
            assert!((0.0..1.0).contains(&p), "progress {p} out of range");
            let (cur, next) = cycle.indices();
            assert_eq!(next, (cur + 1) % 3);
            if (cur, next) != prev {
                assert_eq!(cur, prev.1, "indices advance one step at a time");
                wraps += 1;
                prev = (cur, next);
            }
            // Reset-to-zero drops the remainder, so wraps never outrun n * s.
            assert!(wraps as f32 <= n as f32 * speed + 1e-3);
        }
        assert!(wraps > 0);
    }
}

#[test]
fn default_speed_completes_a_transition_in_about_two_hundred_frames() {
    let mut cycle = ColorCycle::default();
    let mut frames = 0;
    while cycle.indices() == (0, 1) {
        cycle.advance(COLOR_TRANSITION_SPEED);
        frames += 1;
        assert!(frames < 300);
    }
    assert!((199..=201).contains(&frames), "took {frames} frames");
}

#[test]
fn default_palette_is_the_configured_one_in_order() {
    let cycle = ColorCycle::default();
    let channels: Vec<[f32; 3]> = cycle.palette().iter().map(|c| c.to_array()).collect();
    assert_eq!(channels, PALETTE.to_vec());
    for c in cycle.palette() {
        assert!(c.to_array().iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
