// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted gesture stream.
//!
//! Drives a [`TransformSession`] through a pinch-zoom, a rubber-band drag
//! that crosses the edge-shift threshold, and a final layout reset,
//! printing every effect the host would carry out.
//!
//! Run:
//! - `cargo run -p pinchpan_demos --example gesture_script`

use kurbo::{Size, Vec2};
use pinchpan_demos::PrintSink;
use pinchpan_session::{
    drive, CollectionSlot, GestureEvent, PanEvent, PanPhase, PinchEvent,
    PinchPhase, TransformSession,
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

fn main() {
    env_logger::init();

    let mut session = TransformSession::new(Size::new(300.0, 300.0));
    session.set_collection_slot(Some(CollectionSlot {
        position: 1,
        item_count: 4,
    }));
    let mut view = PrintSink;

    let script = [
        ("pinch start", pinch(PinchPhase::Start, 1.0)),
        ("pinch running", pinch(PinchPhase::Running, 1.4)),
        ("pinch running", pinch(PinchPhase::Running, 1.8)),
        ("pinch completed", pinch(PinchPhase::Completed, 1.8)),
        ("pan start", pan(PanPhase::Start, 0.0, 0.0)),
        ("pan running", pan(PanPhase::Running, 0.0, 0.0)),
        ("pan running", pan(PanPhase::Running, 120.0, 20.0)),
        ("pan running", pan(PanPhase::Running, 320.0, 40.0)),
        ("pan completed", pan(PanPhase::Completed, 320.0, 40.0)),
    ];

    for (label, event) in script {
        println!("{label}:");
        drive(&mut session, event, &mut view);
        let state = session.state();
        println!(
            "  state: scale {:.3}, translation ({:.1}, {:.1}), bounds ({:.1}, {:.1})",
            state.scale,
            state.translation.x,
            state.translation.y,
            state.bounds.width,
            state.bounds.height
        );
    }

    println!("reset layout:");
    session.reset_layout().apply_to(&mut view);
    println!("  state: {:?}", session.state());
}
