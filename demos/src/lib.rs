// Copyright 2026 the Pinchpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Pinchpan demos.
//!
//! Run the gesture script demo with:
//! - `cargo run -p pinchpan_demos --example gesture_script`

use kurbo::Vec2;
use pinchpan_session::{EdgeShift, TransformSink};

/// A [`TransformSink`] that prints every effect it receives, standing in
/// for a real view + tween capability.
#[derive(Debug, Default)]
pub struct PrintSink;

impl TransformSink for PrintSink {
    fn set_scale(&mut self, scale: f64) {
        println!("  set scale        -> {scale:.3}");
    }

    fn set_translation(&mut self, translation: Vec2) {
        println!(
            "  set translation  -> ({:.1}, {:.1})",
            translation.x, translation.y
        );
    }

    fn animate_scale(&mut self, scale: f64) {
        println!("  tween scale      -> {scale:.3}");
    }

    fn animate_translation(&mut self, translation: Vec2) {
        println!(
            "  tween translation-> ({:.1}, {:.1})",
            translation.x, translation.y
        );
    }

    fn edge_shift(&mut self, shift: EdgeShift) {
        println!("  edge shift       -> {:?}", shift.direction);
    }
}
