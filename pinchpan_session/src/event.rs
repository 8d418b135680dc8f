// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture event vocabulary: phases, per-gesture payloads, and the raw
//! phase-code decoding used by hosts that bridge an external event loop.
//!
//! Typed events cannot carry an out-of-range phase, so the single fatal
//! condition of this crate — a phase code outside the enumeration — only
//! exists on the [`PinchPhase::from_raw`] / [`PanPhase::from_raw`] path.
//! Decoding fails fast with [`UnexpectedPhase`] and nothing downstream runs
//! for that event.

use core::fmt;

use kurbo::Vec2;

/// Phase of a pinch (two-finger scale) gesture.
///
/// Raw code mapping for [`PinchPhase::from_raw`]: `0` = `Start`,
/// `1` = `Running`, `2` = `Completed`. Pinch recognizers deliver no
/// cancellation phase; code `3` is rejected here, not mapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchPhase {
    /// The recognizer has locked onto a pinch; no scale change yet.
    Start,
    /// An intermediate sample carrying the current scale factor.
    Running,
    /// The fingers lifted; the gesture is over.
    Completed,
}

impl PinchPhase {
    /// Decodes a host phase code, rejecting anything outside the
    /// enumeration.
    pub fn from_raw(code: u32) -> Result<Self, UnexpectedPhase> {
        match code {
            0 => Ok(Self::Start),
            1 => Ok(Self::Running),
            2 => Ok(Self::Completed),
            _ => Err(UnexpectedPhase {
                kind: GestureKind::Pinch,
                code,
            }),
        }
    }
}

/// Phase of a pan (drag) gesture.
///
/// Raw code mapping for [`PanPhase::from_raw`]: `0` = `Start`,
/// `1` = `Running`, `2` = `Completed`, `3` = `Cancelled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    /// The recognizer has locked onto a drag.
    Start,
    /// An intermediate sample carrying the cumulative displacement.
    Running,
    /// The finger lifted normally; end-of-gesture policy runs.
    Completed,
    /// The host aborted the gesture; the content keeps its last position.
    Cancelled,
}

impl PanPhase {
    /// Decodes a host phase code, rejecting anything outside the
    /// enumeration.
    pub fn from_raw(code: u32) -> Result<Self, UnexpectedPhase> {
        match code {
            0 => Ok(Self::Start),
            1 => Ok(Self::Running),
            2 => Ok(Self::Completed),
            3 => Ok(Self::Cancelled),
            _ => Err(UnexpectedPhase {
                kind: GestureKind::Pan,
                code,
            }),
        }
    }
}

/// One pinch sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchEvent {
    /// Where in the gesture this sample sits.
    pub phase: PinchPhase,
    /// The recognizer's continuous scale factor; `1.0` means no change.
    pub scale_delta: f64,
}

/// One pan sample.
///
/// `total_delta` is cumulative from the gesture's own start, not a
/// per-event delta; recognizers that report per-event deltas must be
/// accumulated by the host before submission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    /// Where in the gesture this sample sits.
    pub phase: PanPhase,
    /// Cumulative displacement since the gesture began, in device units.
    pub total_delta: Vec2,
}

/// A gesture sample of either kind, ready for submission to a session.
///
/// Pinch and pan never arrive concurrently; the hosting runtime delivers
/// phases sequentially and a session processes them one at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A pinch (scale) sample.
    Pinch(PinchEvent),
    /// A pan (drag) sample.
    Pan(PanEvent),
}

/// Which gesture a raw phase code claimed to belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Two-finger scale gesture.
    Pinch,
    /// Drag gesture.
    Pan,
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pinch => f.write_str("pinch"),
            Self::Pan => f.write_str("pan"),
        }
    }
}

/// A host delivered a phase code outside the defined enumeration.
///
/// This is an integration bug, not a runtime state: the offending event is
/// rejected before any state is touched and must not be retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnexpectedPhase {
    /// The gesture the code was submitted for.
    pub kind: GestureKind,
    /// The unrecognized code.
    pub code: u32,
}

impl fmt::Display for UnexpectedPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected {} gesture phase code {}", self.kind, self.code)
    }
}

impl core::error::Error for UnexpectedPhase {}
