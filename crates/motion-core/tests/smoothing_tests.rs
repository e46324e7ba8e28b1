// Exponential smoothing primitive.

use motion_core::smoothing::{step, ticks_to_settle};

#[test]
fn step_closes_the_given_fraction() {
    assert!((step(0.0, 10.0, 0.1) - 1.0).abs() < 1e-6);
    assert!((step(5.0, 5.0, 0.3) - 5.0).abs() < 1e-6);
    assert!((step(-10.0, 0.0, 0.5) + 5.0).abs() < 1e-6);
}

#[test]
fn factor_one_snaps() {
    assert_eq!(step(3.0, -7.5, 1.0), -7.5);
}

#[test]
fn repeated_steps_converge_without_overshoot() {
    for &factor in &[0.05_f32, 0.1, 0.12, 0.5, 0.9] {
        let target = -10.0_f32;
        let mut current = 0.0_f32;
        let mut prev_gap = (target - current).abs();
        for _ in 0..500 {
            current = step(current, target, factor);
            assert!(current >= target, "overshoot at factor {factor}: {current}");
            let gap = (target - current).abs();
            assert!(gap <= prev_gap, "gap grew at factor {factor}");
            prev_gap = gap;
        }
        assert!(prev_gap < 1e-3);
    }
}

#[test]
fn ticks_to_settle_matches_reference_budget() {
    // ln(0.01) / ln(0.9) = 43.7
    assert_eq!(ticks_to_settle(1.0, 0.1, 0.01), 44);
    assert_eq!(ticks_to_settle(0.005, 0.1, 0.01), 0);
    assert_eq!(ticks_to_settle(42.0, 1.0, 0.01), 1);
    assert_eq!(ticks_to_settle(1.0, 0.0, 0.01), u32::MAX);
}

#[test]
fn ticks_to_settle_is_enough_in_practice() {
    let n = ticks_to_settle(1.0, 0.1, 0.01);
    let mut current = 1.0_f32;
    for _ in 0..n {
        current = step(current, 0.0, 0.1);
    }
    assert!(current.abs() < 0.01);
    let mut one_short = 1.0_f32;
    for _ in 0..n - 1 {
        one_short = step(one_short, 0.0, 0.1);
    }
    assert!(one_short.abs() >= 0.01);
}
