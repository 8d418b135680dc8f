// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchpan Transform: the transform/bounds model for gesture-zoomed content.
//!
//! This crate provides a small, headless model of the scale + translation
//! state of a piece of content hosted inside a fixed-size viewport. It
//! focuses on:
//! - The current transform (uniform scale with a floor of `1.0`, plus a 2D
//!   translation from the viewport center).
//! - Translation extents ([`Bounds`]) derived from the content size and the
//!   current scale.
//! - The pan baseline offset that keeps translation continuous across the
//!   cumulative-delta samples a drag recognizer delivers.
//!
//! It does **not** interpret gesture events or decide when to clamp; that
//! policy lives in `pinchpan_session`. Callers are expected to:
//! - Feed recognizer output into a session at a higher layer.
//! - Read [`TransformState`] to apply the transform to whatever concrete
//!   view hosts the content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use pinchpan_transform::{Bounds, TransformState};
//!
//! // 300x300 content zoomed to 2x may travel 150 device units per axis:
//! // half of the 300-unit overhang on each side.
//! let bounds = Bounds::for_scale(Size::new(300.0, 300.0), 2.0);
//! assert_eq!(bounds.width, 150.0);
//! assert_eq!(bounds.height, 150.0);
//!
//! // At rest the state is the identity: scale 1, no translation, no bounds.
//! let state = TransformState::default();
//! assert!(state.is_identity());
//! assert_eq!(state.bounds, Bounds::ZERO);
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform and never drops below `1.0`; "unzoomed" is exactly
//!   the identity, so bounds are zero iff the content is at rest.
//! - Translation is measured from the centered resting position, so the
//!   allowed extent is symmetric per axis: `|translation| <= bound`.
//! - Rubber-banding (letting a live drag exceed the bounds) is a session
//!   policy; this crate only supplies the clamping arithmetic.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod state;

pub use bounds::Bounds;
pub use state::TransformState;
