// Capability gating and engine-level wiring.

mod common;

use common::RecordingSurface;
use glam::Vec2;
use motion_core::{
    Axis, Capabilities, EntityView, KindSpec, MotionEngine, MotionParams, Publish, StyleWrite,
    StyleWrites,
};

#[test]
fn coarse_pointer_never_creates_follower() {
    for fine_pointer in [Some(false), None] {
        let caps = Capabilities {
            fine_pointer,
            reduced_motion: Some(false),
        };
        let mut engine = MotionEngine::new(MotionParams::default(), caps).unwrap();
        assert!(!engine.follower_enabled());
        assert_eq!(engine.bind_follower(), None);
        assert!(engine
            .pointer_moved(Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0))
            .is_none());
        assert!(engine.registry.is_empty());
    }
}

#[test]
fn reduced_motion_registers_no_cards() {
    for reduced_motion in [Some(true), None] {
        let caps = Capabilities {
            fine_pointer: Some(false),
            reduced_motion,
        };
        let mut engine = MotionEngine::new(MotionParams::default(), caps).unwrap();
        let mut surface = RecordingSurface::default();
        for key in 0..4 {
            assert!(engine.bind_card(key).is_none());
        }
        assert_eq!(engine.card_count(), 0);
        assert!(engine.registry.is_empty());
        assert!(!engine.needs_frames());
        for _ in 0..10 {
            engine.tick(&mut surface);
        }
        assert!(surface.writes.is_empty());
    }
}

#[test]
fn capabilities_decide_effects() {
    let full = Capabilities {
        fine_pointer: Some(true),
        reduced_motion: Some(false),
    };
    assert!(full.follower_enabled() && full.tilt_enabled() && full.any_motion());
    assert!(!Capabilities::default().any_motion());
}

#[test]
fn bindings_are_idempotent() {
    let caps = Capabilities {
        fine_pointer: Some(true),
        reduced_motion: Some(false),
    };
    let mut engine = MotionEngine::new(MotionParams::default(), caps).unwrap();
    let f1 = engine.bind_follower().unwrap();
    let f2 = engine.bind_follower().unwrap();
    assert_eq!(f1, f2);
    let c1 = engine.bind_card(3).unwrap();
    let c2 = engine.bind_card(3).unwrap();
    assert!(c1.fresh && !c2.fresh);
    assert_eq!(engine.registry.len(), 2);
    assert!(engine.needs_frames());
}

#[test]
fn copied_card_gets_its_own_entity() {
    let caps = Capabilities {
        fine_pointer: Some(false),
        reduced_motion: Some(false),
    };
    let mut engine = MotionEngine::new(MotionParams::default(), caps).unwrap();

    // first pass: unstamped card
    let (key_a, a) = engine.bind_card_element(None, |_| false).unwrap();
    assert!(a.fresh);

    // second pass: the same element comes back with its stamp
    let (key, again) = engine.bind_card_element(Some(key_a), |h| h == a.handle).unwrap();
    assert_eq!((key, again.handle, again.fresh), (key_a, a.handle, false));

    // a clone carries the same stamp but is a different element
    let (key_c, c) = engine.bind_card_element(Some(key_a), |_| false).unwrap();
    assert!(c.fresh);
    assert_ne!(key_c, key_a);
    assert_ne!(c.handle, a.handle);

    // a hand-authored key nobody holds is taken as is
    let (key_d, d) = engine.bind_card_element(Some(40), |_| false).unwrap();
    assert_eq!(key_d, 40);
    assert!(d.fresh);

    assert_eq!(engine.card_count(), 3);
    assert_eq!(engine.registry.len(), 3);
}

#[test]
fn invalid_params_fail_construction() {
    let params = MotionParams {
        tilt_smoothing: 0.0,
        ..MotionParams::default()
    };
    let caps = Capabilities {
        fine_pointer: Some(false),
        reduced_motion: Some(false),
    };
    assert!(MotionEngine::new(params.clone(), caps).is_err());
    // tilt disabled: its kind is never defined, so the bad factor is unused
    let caps = Capabilities {
        fine_pointer: Some(false),
        reduced_motion: Some(true),
    };
    assert!(MotionEngine::new(params, caps).is_ok());
}

struct Opacity;

impl Publish for Opacity {
    fn publish(&mut self, _view: &EntityView<'_>, out: &mut StyleWrites) {
        out.push(StyleWrite::Opacity("0.5"));
    }
    fn rest(&mut self, _view: &EntityView<'_>, out: &mut StyleWrites) {
        out.push(StyleWrite::Opacity("1"));
    }
}

#[test]
fn extra_kinds_share_the_loop() {
    let caps = Capabilities::default();
    let mut engine = MotionEngine::new(MotionParams::default(), caps).unwrap();
    let kind = engine
        .define(
            KindSpec {
                name: "fade",
                axes: &["alpha"],
                smoothing: 1.0,
                settle_epsilon: 0.01,
            },
            Box::new(Opacity),
        )
        .unwrap();
    let h = engine.registry.register(kind).unwrap();
    engine.registry.set_target(h, Axis(0), 1.0);
    let mut surface = RecordingSurface::default();
    let report = engine.tick(&mut surface);
    assert_eq!(report.settled, 1);
    assert_eq!(
        surface.writes_for(h),
        vec![&StyleWrite::Opacity("0.5"), &StyleWrite::Opacity("1")]
    );
}
