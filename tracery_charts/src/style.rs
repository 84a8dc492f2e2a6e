// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dot and tooltip-line styling.
//!
//! Dots are rendered invisible and toggled between two looks: the idle "out"
//! style (composed from a base opacity and an optional border) and the fixed
//! hover style. Both are plain [`Attrs`] bags, so toggling is a merge-apply
//! on the backend and show-then-hide restores the exact out-state fields.

use peniko::{Brush, Color};
use tracery_core::Attrs;

/// Idle dot radius in scene coordinates.
pub const DOT_RADIUS: f64 = 3.0;
/// Hovered dot radius in scene coordinates.
pub const HOVER_DOT_RADIUS: f64 = 4.0;

/// A dot's border contribution to the idle style.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderStyle {
    /// Border paint.
    pub stroke: Brush,
    /// Border width in scene coordinates.
    pub stroke_width: f64,
    /// Border opacity in `0..=1`.
    pub stroke_opacity: f64,
}

impl BorderStyle {
    /// This border as an attribute bag, for merging into a base style.
    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .with_stroke(self.stroke.clone())
            .with_stroke_width(self.stroke_width)
            .with_stroke_opacity(self.stroke_opacity)
    }
}

/// Builds a border style from an optional border paint.
///
/// Returns `None` when no paint is given, so an absent border contributes
/// nothing to [`out_dot_style`]. The width is fixed at 1.
pub fn border_style(stroke: Option<Brush>, opacity: f64) -> Option<BorderStyle> {
    stroke.map(|stroke| BorderStyle {
        stroke,
        stroke_width: 1.0,
        stroke_opacity: opacity,
    })
}

/// Composes the idle ("out") dot style.
///
/// The base is `{fill_opacity: opacity, stroke_opacity: 0,
/// radius: DOT_RADIUS}`; border fields are merged on top and win on overlap.
pub fn out_dot_style(opacity: f64, border: Option<&BorderStyle>) -> Attrs {
    let base = Attrs::new()
        .with_fill_opacity(opacity)
        .with_stroke_opacity(0.0)
        .with_radius(DOT_RADIUS);
    match border {
        Some(border) => base.merged(&border.attrs()),
        None => base,
    }
}

/// The hovered dot style.
pub fn hover_dot_style() -> Attrs {
    Attrs::new()
        .with_fill_opacity(1.0)
        .with_stroke_opacity(0.3)
        .with_stroke_width(2.0)
        .with_radius(HOVER_DOT_RADIUS)
}

/// Stroke paint for the shown tooltip line (`#999`).
pub fn tooltip_line_stroke() -> Brush {
    Color::from_rgb8(0x99, 0x99, 0x99).into()
}
