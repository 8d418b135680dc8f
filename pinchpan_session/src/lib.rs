// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchpan Session: a gesture session state machine for zoomable content.
//!
//! This crate interprets a sequential stream of pinch (scale) and pan
//! (drag) gesture phase events against one piece of content hosted in a
//! fixed-size viewport, and turns them into:
//! - A clamped scale/translation transform (scale floored at `1.0`,
//!   translation extents derived from scale and content size).
//! - Immediate and animated transform effects for the host to apply.
//! - At most one directional edge-shift notification per completed pan,
//!   telling the host the user dragged far enough past the edge to mean
//!   something (typically: advance a pager).
//! - A bounce reconciliation that returns out-of-bounds content to its
//!   nearest resting position when a gesture ends, and snaps the whole
//!   transform back to the exact identity once the zoom is fully released.
//!
//! It does **not** own gesture recognition, rendering, or tween execution.
//! Callers are expected to:
//! - Wire their recognizer's phase callbacks into
//!   [`TransformSession::submit`] (or the raw-code variants when bridging
//!   an external event loop).
//! - Carry out the returned [`SessionOutput`] — directly, or through the
//!   [`TransformSink`] adapter.
//! - Keep delivering events single-threaded; pinch and pan are mutually
//!   exclusive by convention and a pinch start abandons an active pan.
//!
//! The transform/bounds arithmetic lives in [`pinchpan_transform`] and is
//! re-exported here for convenience.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use pinchpan_session::{
//!     GestureEvent, PanEvent, PanPhase, PinchEvent, PinchPhase,
//!     ShiftDirection, TransformSession,
//! };
//!
//! let mut session = TransformSession::new(Size::new(300.0, 300.0));
//!
//! // Zoom in, then drag hard to the right and let go.
//! session.submit(GestureEvent::Pinch(PinchEvent {
//!     phase: PinchPhase::Start,
//!     scale_delta: 1.0,
//! }));
//! session.submit(GestureEvent::Pinch(PinchEvent {
//!     phase: PinchPhase::Running,
//!     scale_delta: 2.0,
//! }));
//! session.submit(GestureEvent::Pinch(PinchEvent {
//!     phase: PinchPhase::Completed,
//!     scale_delta: 2.0,
//! }));
//!
//! for (phase, x) in [
//!     (PanPhase::Start, 0.0),
//!     (PanPhase::Running, 0.0),
//!     (PanPhase::Running, 300.0),
//!     (PanPhase::Completed, 300.0),
//! ] {
//!     let out = session.submit(GestureEvent::Pan(PanEvent {
//!         phase,
//!         total_delta: Vec2::new(x, 0.0),
//!     }));
//!     if let Some(shift) = out.shift {
//!         assert_eq!(shift.direction, ShiftDirection::Left);
//!     }
//! }
//!
//! // The bounce pulled the content back to its resting extent.
//! let state = session.state();
//! assert!(state.bounds.contains(state.translation));
//! ```
//!
//! ## Design notes
//!
//! - The session is an explicit value with a single `submit` entry point;
//!   there is no coupling to any UI event-dispatch mechanism.
//! - During a live drag the X axis deliberately rubber-bands past its
//!   extent (that overshoot is what edge-shift detection measures), while
//!   Y is hard-clamped on every sample.
//! - A cancelled pan keeps the exact pre-cancel position: no edge-shift,
//!   no bounce.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod event;
mod session;
mod sink;

pub use event::{
    GestureEvent, GestureKind, PanEvent, PanPhase, PinchEvent, PinchPhase,
    UnexpectedPhase,
};
pub use session::{
    CollectionSlot, EdgeShift, Effect, Effects, SessionConfig, SessionOutput,
    ShiftDirection, TransformSession,
};
pub use sink::{drive, TransformSink};

pub use pinchpan_transform::{Bounds, TransformState};
