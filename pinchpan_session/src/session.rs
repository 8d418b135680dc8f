// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture session: phases in, effects and edge-shift notifications out.
//!
//! [`TransformSession`] owns one [`TransformState`] and interprets a
//! sequential stream of pinch/pan phase events against it. It never touches
//! a view; every call returns a [`SessionOutput`] describing what the host
//! should do — set the transform now, or ask its tween capability to
//! animate toward a target. Animations are fire-and-forget: a fast second
//! gesture may interrupt an in-flight bounce, and hosts are expected to
//! override a running tween on the same property rather than queue behind
//! it.
//!
//! End-of-gesture policy runs only on completion: a completed pan that was
//! actively panning is first classified against the edge-shift thresholds
//! (at most one directional notification, priority right > left > up >
//! down), then reconciled back to the nearest in-bounds translation. Once
//! the scale has returned exactly to `1.0`, reconciliation performs a full
//! reset so floating-point drift can never leave the resting view slightly
//! off-center.

use kurbo::{Size, Vec2};
use log::{debug, trace};
use smallvec::SmallVec;

use pinchpan_transform::{Bounds, TransformState};

use crate::event::{
    GestureEvent, PanEvent, PanPhase, PinchEvent, PinchPhase, UnexpectedPhase,
};

/// Tunable gesture sensitivity and edge-shift thresholds.
///
/// Fixed for the lifetime of a session; there is no runtime
/// reconfiguration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Sensitivity applied to the recognizer's scale factor: each running
    /// pinch sample moves the scale by `scale_factor * (delta - 1)`.
    pub scale_factor: f64,
    /// Extra X distance past the bounds a pan must end at to count as a
    /// horizontal edge-shift, in device units.
    pub x_margin: f64,
    /// Extra Y distance past the bounds a pan must end at to count as a
    /// vertical edge-shift, in device units.
    pub y_margin: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.5,
            x_margin: 150.0,
            y_margin: 100.0,
        }
    }
}

/// Read-only position of the controlled content inside a paged collection.
///
/// When present, outward horizontal panning is suppressed at the ends of
/// the collection: the first item cannot reveal non-existent content to its
/// right, the last cannot to its left. Absent, no suppression applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionSlot {
    /// Index of this item within the collection.
    pub position: usize,
    /// Total number of items in the collection.
    pub item_count: usize,
}

impl CollectionSlot {
    fn is_first(&self) -> bool {
        self.position == 0
    }

    fn is_last(&self) -> bool {
        self.item_count > 0 && self.position == self.item_count - 1
    }
}

/// Cardinal direction of an edge-shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftDirection {
    /// The pan ended far past the left bound (negative X overshoot).
    Right,
    /// The pan ended far past the right bound (positive X overshoot).
    Left,
    /// The pan ended far past the top bound (negative Y overshoot).
    Up,
    /// The pan ended far past the bottom bound (positive Y overshoot).
    Down,
}

/// A completed pan ended beyond bounds plus margin in one direction.
///
/// At most one fires per completed pan. The host decides what the
/// direction means — typically advancing a pager.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeShift {
    /// The winning direction under the right > left > up > down priority.
    pub direction: ShiftDirection,
    /// The pan sample that completed the gesture.
    pub pan: PanEvent,
}

/// One transform effect for the host to carry out, in emission order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Apply this uniform scale immediately.
    SetScale(f64),
    /// Apply this translation immediately.
    SetTranslation(Vec2),
    /// Tween the scale toward this value; cancel any prior scale tween.
    AnimateScale(f64),
    /// Tween the translation toward this value; cancel any prior
    /// translation tween.
    AnimateTranslation(Vec2),
}

/// Inline buffer of effects emitted for one submitted event.
pub type Effects = SmallVec<[Effect; 4]>;

/// Everything one submitted event asks of the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionOutput {
    /// Transform effects, to be carried out in order.
    pub effects: Effects,
    /// The edge-shift notification, if this event completed one.
    pub shift: Option<EdgeShift>,
}

/// Gesture session for one piece of zoomable, pannable content.
///
/// Created once per controlled view and kept for its lifetime; the only
/// mid-session reinitialization is [`TransformSession::reset_layout`].
///
/// ## Minimal example
///
/// ```rust
/// use kurbo::Size;
/// use pinchpan_session::{
///     Effect, GestureEvent, PinchEvent, PinchPhase, TransformSession,
/// };
///
/// let mut session = TransformSession::new(Size::new(300.0, 300.0));
///
/// session.submit(GestureEvent::Pinch(PinchEvent {
///     phase: PinchPhase::Start,
///     scale_delta: 1.0,
/// }));
/// let out = session.submit(GestureEvent::Pinch(PinchEvent {
///     phase: PinchPhase::Running,
///     scale_delta: 2.0,
/// }));
///
/// // Default sensitivity 1.5 turns the recognizer's 2.0 into scale 2.5,
/// // which lets 300x300 content travel 225 units per axis.
/// assert_eq!(session.state().scale, 2.5);
/// assert_eq!(session.state().bounds.width, 225.0);
/// assert_eq!(out.effects[0], Effect::SetScale(2.5));
/// ```
#[derive(Clone, Debug)]
pub struct TransformSession {
    state: TransformState,
    content: Size,
    config: SessionConfig,
    slot: Option<CollectionSlot>,
}

impl TransformSession {
    /// Creates a session for content of the given unzoomed size, with
    /// default configuration and no collection context.
    #[must_use]
    pub fn new(content: Size) -> Self {
        Self::with_config(content, SessionConfig::default())
    }

    /// Creates a session with explicit configuration.
    #[must_use]
    pub fn with_config(content: Size, config: SessionConfig) -> Self {
        Self {
            state: TransformState::identity(),
            content,
            config,
            slot: None,
        }
    }

    /// Current transform state.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// The configuration this session was built with.
    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Unzoomed content size the bounds are derived from.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Updates the unzoomed content size (for example after a host
    /// relayout) and rederives the bounds at the current scale.
    pub fn set_content_size(&mut self, content: Size) {
        self.content = content;
        self.state.bounds = Bounds::for_scale(content, self.state.scale);
    }

    /// Current collection context, if any.
    #[must_use]
    pub fn collection_slot(&self) -> Option<CollectionSlot> {
        self.slot
    }

    /// Associates (or clears) the read-only collection context used for
    /// edge suppression.
    pub fn set_collection_slot(&mut self, slot: Option<CollectionSlot>) {
        self.slot = slot;
    }

    /// Synchronously reinitializes the transform to the identity.
    ///
    /// The scale change is handed to the host's tween capability; the
    /// translation reset is immediate. Idempotent.
    pub fn reset_layout(&mut self) -> SessionOutput {
        self.state.reset();
        let mut out = SessionOutput::default();
        out.effects.push(Effect::AnimateScale(1.0));
        out.effects.push(Effect::SetTranslation(Vec2::ZERO));
        out
    }

    /// Processes one gesture sample and returns what the host should do.
    pub fn submit(&mut self, event: GestureEvent) -> SessionOutput {
        let mut out = SessionOutput::default();
        match event {
            GestureEvent::Pinch(pinch) => self.on_pinch(pinch, &mut out),
            GestureEvent::Pan(pan) => self.on_pan(pan, &mut out),
        }
        out
    }

    /// Raw-code variant of [`TransformSession::submit`] for pinch samples.
    ///
    /// Rejects codes outside the phase enumeration without touching any
    /// state; see [`UnexpectedPhase`].
    pub fn submit_raw_pinch(
        &mut self,
        phase_code: u32,
        scale_delta: f64,
    ) -> Result<SessionOutput, UnexpectedPhase> {
        let phase = PinchPhase::from_raw(phase_code)?;
        Ok(self.submit(GestureEvent::Pinch(PinchEvent { phase, scale_delta })))
    }

    /// Raw-code variant of [`TransformSession::submit`] for pan samples.
    ///
    /// Rejects codes outside the phase enumeration without touching any
    /// state; see [`UnexpectedPhase`].
    pub fn submit_raw_pan(
        &mut self,
        phase_code: u32,
        total_delta: Vec2,
    ) -> Result<SessionOutput, UnexpectedPhase> {
        let phase = PanPhase::from_raw(phase_code)?;
        Ok(self.submit(GestureEvent::Pan(PanEvent { phase, total_delta })))
    }

    fn on_pinch(&mut self, event: PinchEvent, out: &mut SessionOutput) {
        match event.phase {
            PinchPhase::Start => {
                // Pinch takes exclusive control. An in-flight pan is
                // abandoned: its later completion runs no edge-shift and
                // no bounce.
                if self.state.panning {
                    trace!("pinch start abandons active pan");
                }
                self.state.panning = false;
            }
            PinchPhase::Running => {
                let scale = (self.state.scale
                    + self.config.scale_factor * (event.scale_delta - 1.0))
                    .max(1.0);
                self.state.scale = scale;
                self.state.bounds = Bounds::for_scale(self.content, scale);
                // Y snaps into the shrinking extent immediately; X is left
                // for completion-time reconciliation so an already-set pan
                // settles via the bounce instead of jumping mid-pinch.
                self.state.translation.y =
                    self.state.bounds.clamp_y(self.state.translation.y);
                out.effects.push(Effect::SetScale(scale));
                out.effects.push(Effect::SetTranslation(self.state.translation));
            }
            PinchPhase::Completed => self.bounce(out),
        }
    }

    fn on_pan(&mut self, event: PanEvent, out: &mut SessionOutput) {
        match event.phase {
            PanPhase::Start => self.state.rebaseline(event.total_delta),
            PanPhase::Running => {
                if !self.state.panning {
                    // First moving sample (or a pinch just handed control
                    // back): re-capture the baseline instead of moving the
                    // content.
                    self.state.rebaseline(event.total_delta);
                    self.state.panning = true;
                    return;
                }
                let mut current = self.state.resolve_pan(event.total_delta);
                if let Some(slot) = self.slot {
                    if slot.is_first() {
                        current.x = current.x.min(self.state.bounds.width);
                    }
                    if slot.is_last() {
                        current.x = current.x.max(-self.state.bounds.width);
                    }
                }
                // X rubber-bands past the bounds during a live drag; Y is
                // always hard-clamped.
                self.state.translation.x = current.x;
                self.state.translation.y = self.state.bounds.clamp_y(current.y);
                out.effects.push(Effect::SetTranslation(self.state.translation));
            }
            PanPhase::Completed => {
                // A tap that never produced a moving sample has no
                // end-of-gesture policy, and neither does a pan abandoned
                // by a pinch start.
                if !self.state.panning {
                    return;
                }
                self.state.panning = false;
                out.shift = self.edge_shift(event);
                self.bounce(out);
            }
            // Keep the exact pre-cancel position: no edge-shift, no
            // reconciliation.
            PanPhase::Cancelled => {}
        }
    }

    /// Classifies the pre-bounce translation against bounds + margin.
    ///
    /// First match wins in the fixed priority right, left, up, down, so a
    /// diagonal overshoot reports only its horizontal component.
    fn edge_shift(&self, pan: PanEvent) -> Option<EdgeShift> {
        let t = self.state.translation;
        let x_limit = self.state.bounds.width + self.config.x_margin;
        let y_limit = self.state.bounds.height + self.config.y_margin;
        let direction = if t.x < -x_limit {
            ShiftDirection::Right
        } else if t.x > x_limit {
            ShiftDirection::Left
        } else if t.y < -y_limit {
            ShiftDirection::Up
        } else if t.y > y_limit {
            ShiftDirection::Down
        } else {
            return None;
        };
        debug!("edge shift {direction:?} at translation {t:?}");
        Some(EdgeShift { direction, pan })
    }

    /// Reconciles an out-of-bounds translation to the nearest resting
    /// point, then fully resets once the scale is back at the identity.
    fn bounce(&mut self, out: &mut SessionOutput) {
        let bounds = self.state.bounds;
        let t = self.state.translation;

        // Per-axis nearest in-bounds point. The shifted-left/right and
        // shifted-up/down conditions are mutually exclusive by
        // construction, so this covers all nine directional cases.
        let mut settled = Vec2::new(bounds.clamp_x(t.x), bounds.clamp_y(t.y));

        if self.state.is_identity() {
            // Exact identity once zoom is fully released, even if drift
            // left the translation at a tiny non-zero value.
            settled = Vec2::ZERO;
            self.state.bounds = Bounds::ZERO;
            self.state.offset = Vec2::ZERO;
            debug!("scale back at identity, resetting layout");
        }

        if settled != t {
            self.state.translation = settled;
            out.effects.push(Effect::AnimateTranslation(settled));
        }
    }
}
