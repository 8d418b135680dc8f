// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sink adapter: forward session output to a host-side transform target.
//!
//! The session itself is headless and returns [`SessionOutput`] values;
//! hosts that prefer a callback surface implement [`TransformSink`] over
//! whatever concrete view hosts the content and use [`drive`] (or
//! [`SessionOutput::apply_to`]) instead of interpreting effect lists by
//! hand. All policy stays in the session; the sink only carries effects
//! across the seam.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use pinchpan_session::{
//!     drive, GestureEvent, PinchEvent, PinchPhase, TransformSession,
//!     TransformSink,
//! };
//!
//! #[derive(Default)]
//! struct Recorder {
//!     scale: f64,
//!     translation: Vec2,
//! }
//!
//! impl TransformSink for Recorder {
//!     fn set_scale(&mut self, scale: f64) {
//!         self.scale = scale;
//!     }
//!     fn set_translation(&mut self, translation: Vec2) {
//!         self.translation = translation;
//!     }
//!     fn animate_scale(&mut self, scale: f64) {
//!         self.scale = scale;
//!     }
//!     fn animate_translation(&mut self, translation: Vec2) {
//!         self.translation = translation;
//!     }
//! }
//!
//! let mut session = TransformSession::new(Size::new(300.0, 300.0));
//! let mut view = Recorder::default();
//!
//! drive(&mut session, GestureEvent::Pinch(PinchEvent {
//!     phase: PinchPhase::Start,
//!     scale_delta: 1.0,
//! }), &mut view);
//! drive(&mut session, GestureEvent::Pinch(PinchEvent {
//!     phase: PinchPhase::Running,
//!     scale_delta: 2.0,
//! }), &mut view);
//!
//! assert_eq!(view.scale, 2.5);
//! ```

use crate::event::GestureEvent;
use crate::session::{EdgeShift, Effect, SessionOutput, TransformSession};

use kurbo::Vec2;

/// Narrow capability a host exposes for applying transform effects.
///
/// `set_*` calls are immediate; `animate_*` calls are fire-and-forget
/// requests to the host's tween capability, which is expected to cancel a
/// running tween on the same property rather than queue behind it.
pub trait TransformSink {
    /// Apply this uniform scale now.
    fn set_scale(&mut self, scale: f64);
    /// Apply this translation now.
    fn set_translation(&mut self, translation: Vec2);
    /// Tween the scale toward this value.
    fn animate_scale(&mut self, scale: f64);
    /// Tween the translation toward this value.
    fn animate_translation(&mut self, translation: Vec2);
    /// A completed pan crossed an edge-shift threshold. The default does
    /// nothing; pager hosts typically advance a page here.
    fn edge_shift(&mut self, shift: EdgeShift) {
        let _ = shift;
    }
}

impl SessionOutput {
    /// Forwards every effect (and the edge-shift notification, if any) to
    /// `sink`, in emission order.
    pub fn apply_to(&self, sink: &mut impl TransformSink) {
        for effect in &self.effects {
            match *effect {
                Effect::SetScale(scale) => sink.set_scale(scale),
                Effect::SetTranslation(t) => sink.set_translation(t),
                Effect::AnimateScale(scale) => sink.animate_scale(scale),
                Effect::AnimateTranslation(t) => sink.animate_translation(t),
            }
        }
        if let Some(shift) = self.shift {
            sink.edge_shift(shift);
        }
    }
}

/// Submits `event` to `session` and forwards the output to `sink`.
pub fn drive(
    session: &mut TransformSession,
    event: GestureEvent,
    sink: &mut impl TransformSink,
) {
    session.submit(event).apply_to(sink);
}
