// Periodic task list and flip-clock planning.

use instant::Instant;
use motion_core::clock::{plan_flip, two_digits, Flip};
use motion_core::constants::{CLOCK_PERIOD, LOGO_SWAP_PERIOD};
use motion_core::TaskList;
use std::time::Duration;

#[test]
fn tasks_fire_on_their_own_periods() {
    let t0 = Instant::now();
    let mut tasks = TaskList::new();
    let clock = tasks.add("clock", CLOCK_PERIOD, t0, true);
    let logo = tasks.add("logo", LOGO_SWAP_PERIOD, t0, false);
    assert_eq!(tasks.poll_interval(), Some(CLOCK_PERIOD));

    assert_eq!(tasks.due(t0).as_slice(), &[clock]);
    assert!(tasks.due(t0 + Duration::from_millis(500)).is_empty());

    for s in 1..=8 {
        let due = tasks.due(t0 + Duration::from_secs(s));
        assert!(due.contains(&clock));
        assert_eq!(due.contains(&logo), s == 8, "logo at {s}s");
    }
    assert_eq!(tasks.runs(clock), 9);
    assert_eq!(tasks.runs(logo), 1);
    assert_eq!(tasks.name(logo), Some("logo"));
}

#[test]
fn late_poll_fires_once() {
    let t0 = Instant::now();
    let mut tasks = TaskList::new();
    let clock = tasks.add("clock", Duration::from_secs(1), t0, false);
    let due = tasks.due(t0 + Duration::from_millis(5_500));
    assert_eq!(due.as_slice(), &[clock]);
    // next boundary is 6s, not 2s
    assert!(tasks.due(t0 + Duration::from_millis(5_900)).is_empty());
    assert_eq!(tasks.due(t0 + Duration::from_secs(6)).as_slice(), &[clock]);
    assert_eq!(tasks.runs(clock), 2);
}

#[test]
fn long_suspension_realigns_without_overflow() {
    let t0 = Instant::now();
    let mut tasks = TaskList::new();
    let tick = tasks.add("tick", Duration::from_millis(1), t0, false);
    // ~5.2e9 missed periods, more than fit in a u32
    let wake = t0 + Duration::from_secs(60 * 86_400) + Duration::from_micros(400);
    assert_eq!(tasks.due(wake).as_slice(), &[tick]);
    assert!(tasks.due(wake + Duration::from_micros(500)).is_empty());
    assert_eq!(tasks.due(wake + Duration::from_micros(600)).as_slice(), &[tick]);
    assert_eq!(tasks.runs(tick), 2);
}

#[test]
fn empty_list_has_no_interval() {
    let tasks = TaskList::new();
    assert!(tasks.is_empty());
    assert_eq!(tasks.poll_interval(), None);
}

#[test]
fn clock_faces_are_zero_padded() {
    assert_eq!(two_digits(0), "00");
    assert_eq!(two_digits(7), "07");
    assert_eq!(two_digits(23), "23");
}

#[test]
fn flip_only_when_face_changes() {
    assert_eq!(plan_flip("09", 9), None);
    assert_eq!(plan_flip(" 09\n", 9), None);
    assert_eq!(
        plan_flip("09", 10),
        Some(Flip {
            from: "09".to_string(),
            to: "10".to_string()
        })
    );
    assert_eq!(
        plan_flip("", 5),
        Some(Flip {
            from: String::new(),
            to: "05".to_string()
        })
    );
}
