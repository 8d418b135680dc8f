// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `pinchpan_session` crate.
//!
//! These drive full gesture scripts through a [`TransformSession`] and
//! check the end-to-end contracts: the scale floor, bounds consistency,
//! live clamping, edge-shift notification policy, and the bounce/reset
//! behavior at gesture completion.

use kurbo::{Size, Vec2};
use pinchpan_session::{
    Bounds, CollectionSlot, Effect, GestureEvent, PanEvent, PanPhase,
    PinchEvent, PinchPhase, SessionConfig, ShiftDirection, TransformSession,
};

fn pinch(phase: PinchPhase, scale_delta: f64) -> GestureEvent {
    GestureEvent::Pinch(PinchEvent { phase, scale_delta })
}

fn pan(phase: PanPhase, x: f64, y: f64) -> GestureEvent {
    GestureEvent::Pan(PanEvent {
        phase,
        total_delta: Vec2::new(x, y),
    })
}

/// Session over 300x300 content with unit scale sensitivity, so a running
/// pinch sample's `scale_delta` reads directly as the scale increment.
fn unit_session() -> TransformSession {
    TransformSession::with_config(
        Size::new(300.0, 300.0),
        SessionConfig {
            scale_factor: 1.0,
            ..SessionConfig::default()
        },
    )
}

/// Runs one complete pinch gesture ending at `scale` (unit sensitivity).
fn pinch_to(session: &mut TransformSession, scale: f64) {
    session.submit(pinch(PinchPhase::Start, 1.0));
    let delta = scale - session.state().scale + 1.0;
    session.submit(pinch(PinchPhase::Running, delta));
    session.submit(pinch(PinchPhase::Completed, delta));
}

/// Runs one complete pan gesture through `samples` of cumulative deltas.
fn pan_through(session: &mut TransformSession, samples: &[(f64, f64)]) -> Option<ShiftDirection> {
    session.submit(pan(PanPhase::Start, 0.0, 0.0));
    session.submit(pan(PanPhase::Running, 0.0, 0.0));
    let mut last = (0.0, 0.0);
    for &(x, y) in samples {
        session.submit(pan(PanPhase::Running, x, y));
        last = (x, y);
    }
    let out = session.submit(pan(PanPhase::Completed, last.0, last.1));
    out.shift.map(|s| s.direction)
}

#[test]
fn scale_floor_holds_for_arbitrary_pinch_streams() {
    let mut session = TransformSession::new(Size::new(300.0, 300.0));
    session.submit(pinch(PinchPhase::Start, 1.0));
    for delta in [0.3, 1.8, 0.1, 2.4, 0.0, 0.9, 1.1] {
        session.submit(pinch(PinchPhase::Running, delta));
        assert!(session.state().scale >= 1.0);
    }
    session.submit(pinch(PinchPhase::Completed, 1.1));
    assert!(session.state().scale >= 1.0);
}

#[test]
fn bounds_are_zero_exactly_when_unzoomed() {
    let mut session = unit_session();
    assert!(session.state().bounds.is_zero());

    pinch_to(&mut session, 2.0);
    assert!(!session.state().bounds.is_zero());
    assert_eq!(
        session.state().bounds,
        Bounds::for_scale(Size::new(300.0, 300.0), 2.0)
    );

    pinch_to(&mut session, 1.0);
    assert!(session.state().bounds.is_zero());
    assert!(session.state().is_identity());
}

#[test]
fn completed_gestures_always_settle_within_bounds_or_identity() {
    let mut session = unit_session();

    let scripts: &[(f64, &[(f64, f64)])] = &[
        (2.0, &[(50.0, 10.0), (400.0, -30.0)]),
        (3.0, &[(-500.0, 200.0)]),
        (1.5, &[(10.0, 10.0), (-20.0, -400.0), (300.0, 0.0)]),
        (1.0, &[(250.0, 80.0)]),
    ];
    for &(scale, samples) in scripts {
        pinch_to(&mut session, scale);
        pan_through(&mut session, samples);
        let state = session.state();
        assert!(
            state.bounds.contains(state.translation)
                || (state.is_identity() && state.translation == Vec2::ZERO),
            "settled out of bounds after scale {scale}: {state:?}"
        );
    }
}

#[test]
fn live_y_never_exceeds_its_extent() {
    let mut session = unit_session();
    pinch_to(&mut session, 2.0);
    let height = session.state().bounds.height;

    session.submit(pan(PanPhase::Start, 0.0, 0.0));
    session.submit(pan(PanPhase::Running, 0.0, 0.0));
    for &(x, y) in &[(30.0, 90.0), (60.0, 300.0), (-200.0, -500.0), (0.0, 75.0)] {
        session.submit(pan(PanPhase::Running, x, y));
        assert!(session.state().translation.y.abs() <= height);
    }
}

// Scenario: pan at scale 1 with zero bounds. X rubber-bands out to 200,
// past the margin, and the completion both notifies and fully resets.
#[test]
fn unzoomed_overdrag_notifies_and_resets_to_identity() {
    let mut session = TransformSession::new(Size::new(300.0, 300.0));
    let shift = pan_through(&mut session, &[(200.0, 0.0)]);

    assert_eq!(shift, Some(ShiftDirection::Left));
    let state = session.state();
    assert!(state.is_identity());
    assert_eq!(state.translation, Vec2::ZERO);
    assert_eq!(state.offset, Vec2::ZERO);
    assert!(state.bounds.is_zero());
}

// Scenario: zoom to 1.5x (75-unit extents), drag left far past
// bounds + margin, release. The horizontal overshoot is negative, so the
// Right notification fires and the bounce settles at the left extent.
#[test]
fn deep_negative_overdrag_shifts_right_and_bounces_to_extent() {
    let mut session = unit_session();
    pinch_to(&mut session, 1.5);
    assert_eq!(session.state().bounds.width, 75.0);

    let shift = pan_through(&mut session, &[(-400.0, 0.0)]);
    assert_eq!(shift, Some(ShiftDirection::Right));
    assert_eq!(session.state().translation.x, -75.0);

    // Mirrored drag: positive overshoot, Left notification, right extent.
    let shift = pan_through(&mut session, &[(400.0, 0.0)]);
    assert_eq!(shift, Some(ShiftDirection::Left));
    assert_eq!(session.state().translation.x, 75.0);
}

// Scenario: first collection item. An outward drag that would reveal
// non-existent content to the right is pinned at the bound before it is
// applied, so it can never build up to a notification.
#[test]
fn first_item_edge_suppression_prevents_notification() {
    let mut session = unit_session();
    session.set_collection_slot(Some(CollectionSlot {
        position: 0,
        item_count: 3,
    }));
    pinch_to(&mut session, 1.5);

    let shift = pan_through(&mut session, &[(100.0, 0.0), (400.0, 0.0)]);
    assert!(shift.is_none());
    assert_eq!(session.state().translation.x, 75.0);
}

// Scenario: a pinch start arrives while a pan is actively dragging. The
// pan is abandoned; its completion must produce no notification and no
// bounce.
#[test]
fn pinch_start_mid_pan_abandons_completion_effects() {
    let mut session = unit_session();
    pinch_to(&mut session, 2.0);

    session.submit(pan(PanPhase::Start, 0.0, 0.0));
    session.submit(pan(PanPhase::Running, 0.0, 0.0));
    session.submit(pan(PanPhase::Running, 400.0, 0.0));
    let overshoot = session.state().translation.x;
    assert!(overshoot > session.state().bounds.width);

    session.submit(pinch(PinchPhase::Start, 1.0));
    let out = session.submit(pan(PanPhase::Completed, 400.0, 0.0));

    assert!(out.shift.is_none());
    assert!(out.effects.is_empty());
    assert_eq!(session.state().translation.x, overshoot);
}

#[test]
fn cancelled_and_completed_pans_diverge() {
    let script = [(0.0, 0.0), (120.0, 0.0)];

    let mut cancelled = unit_session();
    pinch_to(&mut cancelled, 2.0);
    cancelled.submit(pan(PanPhase::Start, 0.0, 0.0));
    for &(x, y) in &script {
        cancelled.submit(pan(PanPhase::Running, x, y));
    }
    cancelled.submit(pan(PanPhase::Cancelled, 120.0, 0.0));

    let mut completed = unit_session();
    pinch_to(&mut completed, 2.0);
    completed.submit(pan(PanPhase::Start, 0.0, 0.0));
    for &(x, y) in &script {
        completed.submit(pan(PanPhase::Running, x, y));
    }
    completed.submit(pan(PanPhase::Completed, 120.0, 0.0));

    // 120 fingers-worth at 2x resolves to 240, past the 150 extent. The
    // completed gesture reconciles; the cancelled one keeps the overshoot.
    assert_eq!(cancelled.state().translation.x, 240.0);
    assert_eq!(completed.state().translation.x, 150.0);
}

#[test]
fn pinch_into_pan_rebaselines_continuously() {
    let mut session = unit_session();

    // Zoom in without completing the pinch, then start dragging. The pan
    // must pick up from the translation the pinch left behind.
    session.submit(pinch(PinchPhase::Start, 1.0));
    session.submit(pinch(PinchPhase::Running, 2.0));
    assert_eq!(session.state().scale, 2.0);

    // The recognizer hands over mid-stream: no pan Start, straight into
    // Running with accumulated displacement.
    session.submit(pan(PanPhase::Running, 35.0, 0.0));
    assert_eq!(session.state().translation, Vec2::ZERO);

    session.submit(pan(PanPhase::Running, 85.0, 0.0));
    assert_eq!(session.state().translation.x, 100.0);
}

#[test]
fn reset_layout_between_gestures_is_a_clean_identity() {
    let mut session = unit_session();
    pinch_to(&mut session, 2.5);
    pan_through(&mut session, &[(80.0, 40.0)]);

    let out = session.reset_layout();
    assert_eq!(out.effects[0], Effect::AnimateScale(1.0));
    assert_eq!(out.effects[1], Effect::SetTranslation(Vec2::ZERO));
    assert!(session.state().is_identity());
    assert!(session.state().bounds.is_zero());

    // The next gesture starts from scratch.
    pinch_to(&mut session, 1.5);
    assert_eq!(session.state().bounds.width, 75.0);
    assert_eq!(session.state().translation, Vec2::ZERO);
}

#[test]
fn raw_phase_bridge_matches_typed_submission() {
    let mut raw = unit_session();
    let mut typed = unit_session();

    typed.submit(pinch(PinchPhase::Start, 1.0));
    typed.submit(pinch(PinchPhase::Running, 2.0));
    typed.submit(pan(PanPhase::Start, 0.0, 0.0));
    typed.submit(pan(PanPhase::Running, 0.0, 0.0));
    typed.submit(pan(PanPhase::Running, 50.0, 20.0));

    raw.submit_raw_pinch(0, 1.0).unwrap();
    raw.submit_raw_pinch(1, 2.0).unwrap();
    raw.submit_raw_pan(0, Vec2::ZERO).unwrap();
    raw.submit_raw_pan(1, Vec2::ZERO).unwrap();
    raw.submit_raw_pan(1, Vec2::new(50.0, 20.0)).unwrap();

    assert_eq!(raw.state(), typed.state());

    // An unknown code fails fast and changes nothing.
    let before = *raw.state();
    assert!(raw.submit_raw_pan(11, Vec2::new(9.0, 9.0)).is_err());
    assert_eq!(*raw.state(), before);
}
