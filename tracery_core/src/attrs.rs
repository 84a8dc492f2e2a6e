// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse visual attribute bags.
//!
//! Primitives carry their full visual state as an [`Attrs`] value, and every
//! update is expressed as another (usually smaller) `Attrs` applied on top.
//! Geometry (`center`, `segment`) lives in the bag alongside paint so it can
//! be tweened like any other attribute.

use kurbo::{Line, Point};
use peniko::Brush;

/// A sparse bundle of visual attributes.
///
/// An absent field means "leave as is" when the bag is applied to a primitive,
/// and "contributes nothing" when two bags are merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attrs {
    /// Fill paint.
    pub fill: Option<Brush>,
    /// Fill opacity in `0..=1`.
    pub fill_opacity: Option<f64>,
    /// Stroke paint.
    pub stroke: Option<Brush>,
    /// Stroke opacity in `0..=1`.
    pub stroke_opacity: Option<f64>,
    /// Stroke width in scene coordinates.
    pub stroke_width: Option<f64>,
    /// Circle radius in scene coordinates.
    pub radius: Option<f64>,
    /// Circle center in scene coordinates.
    pub center: Option<Point>,
    /// Segment geometry for line primitives.
    pub segment: Option<Line>,
}

impl Attrs {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the fill opacity.
    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    /// Sets the stroke paint.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Sets the stroke opacity.
    pub fn with_stroke_opacity(mut self, opacity: f64) -> Self {
        self.stroke_opacity = Some(opacity);
        self
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Sets the circle radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the circle center.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    /// Sets the segment geometry.
    pub fn with_segment(mut self, segment: Line) -> Self {
        self.segment = Some(segment);
        self
    }

    /// Per-field union of two bags; fields present in `over` win.
    pub fn merged(mut self, over: &Self) -> Self {
        self.apply(over);
        self
    }

    /// Writes every field present in `patch` into `self`, leaving the rest
    /// untouched.
    pub fn apply(&mut self, patch: &Self) {
        if let Some(fill) = &patch.fill {
            self.fill = Some(fill.clone());
        }
        if let Some(v) = patch.fill_opacity {
            self.fill_opacity = Some(v);
        }
        if let Some(stroke) = &patch.stroke {
            self.stroke = Some(stroke.clone());
        }
        if let Some(v) = patch.stroke_opacity {
            self.stroke_opacity = Some(v);
        }
        if let Some(v) = patch.stroke_width {
            self.stroke_width = Some(v);
        }
        if let Some(v) = patch.radius {
            self.radius = Some(v);
        }
        if let Some(v) = patch.center {
            self.center = Some(v);
        }
        if let Some(v) = patch.segment {
            self.segment = Some(v);
        }
    }

    /// Returns only the paint fields (`fill`, `stroke`) of this bag.
    ///
    /// Paints are not interpolable; tweens apply them once when they start.
    pub fn paint_fields(&self) -> Self {
        Self {
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
            ..Self::default()
        }
    }

    /// Interpolates the numeric and geometric fields of `to` from `from`.
    ///
    /// Only fields present in `to` appear in the result. A field `to` animates
    /// that `from` never had jumps straight to the target value. Paint fields
    /// are never part of the result.
    pub fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        Self {
            fill: None,
            fill_opacity: to
                .fill_opacity
                .map(|v| lerp_f64(from.fill_opacity, v, t)),
            stroke: None,
            stroke_opacity: to
                .stroke_opacity
                .map(|v| lerp_f64(from.stroke_opacity, v, t)),
            stroke_width: to
                .stroke_width
                .map(|v| lerp_f64(from.stroke_width, v, t)),
            radius: to.radius.map(|v| lerp_f64(from.radius, v, t)),
            center: to.center.map(|c| match from.center {
                Some(a) => a.lerp(c, t),
                None => c,
            }),
            segment: to.segment.map(|s| match from.segment {
                Some(a) => Line::new(a.p0.lerp(s.p0, t), a.p1.lerp(s.p1, t)),
                None => s,
            }),
        }
    }
}

fn lerp_f64(from: Option<f64>, to: f64, t: f64) -> f64 {
    match from {
        Some(a) => a + (to - a) * t,
        None => to,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Line;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn merged_is_later_wins_per_field() {
        let base = Attrs::new()
            .with_fill_opacity(0.5)
            .with_stroke_opacity(0.0)
            .with_radius(3.0);
        let border = Attrs::new()
            .with_stroke(css::RED)
            .with_stroke_width(1.0)
            .with_stroke_opacity(0.5);

        let out = base.clone().merged(&border);
        assert_eq!(out.fill_opacity, Some(0.5), "base field kept");
        assert_eq!(out.radius, Some(3.0), "base field kept");
        assert_eq!(out.stroke_opacity, Some(0.5), "override wins");
        assert_eq!(out.stroke_width, Some(1.0), "added field present");
        assert_eq!(out.stroke, Some(css::RED.into()), "added field present");

        // Merging an empty bag changes nothing.
        assert_eq!(base.clone().merged(&Attrs::new()), base);
    }

    #[test]
    fn apply_leaves_absent_fields_alone() {
        let mut state = Attrs::new()
            .with_segment(Line::new((10.0, 100.0), (10.0, 0.0)))
            .with_stroke(css::BLACK)
            .with_stroke_opacity(1.0);
        state.apply(&Attrs::new().with_stroke_opacity(0.0));
        assert_eq!(state.stroke_opacity, Some(0.0), "patched field written");
        assert_eq!(
            state.segment,
            Some(Line::new((10.0, 100.0), (10.0, 0.0))),
            "untouched field kept"
        );
        assert_eq!(state.stroke, Some(css::BLACK.into()), "untouched field kept");
    }

    #[test]
    fn lerp_interpolates_present_fields_and_jumps_missing_ones() {
        let from = Attrs::new().with_fill_opacity(0.0).with_radius(3.0);
        let to = Attrs::new()
            .with_fill_opacity(1.0)
            .with_radius(4.0)
            .with_stroke_width(2.0);

        let mid = Attrs::lerp(&from, &to, 0.5);
        assert_eq!(mid.fill_opacity, Some(0.5), "midpoint");
        assert_eq!(mid.radius, Some(3.5), "midpoint");
        assert_eq!(mid.stroke_width, Some(2.0), "missing start jumps to target");

        let end = Attrs::lerp(&from, &to, 1.0);
        assert_eq!(end.fill_opacity, Some(1.0), "endpoint exact");
        assert_eq!(end.radius, Some(4.0), "endpoint exact");
    }

    #[test]
    fn lerp_moves_segment_endpoints() {
        let from = Attrs::new().with_segment(Line::new((0.0, 0.0), (0.0, 0.0)));
        let to = Attrs::new().with_segment(Line::new((0.0, 0.0), (10.0, 20.0)));
        let mid = Attrs::lerp(&from, &to, 0.5);
        assert_eq!(
            mid.segment,
            Some(Line::new((0.0, 0.0), (5.0, 10.0))),
            "endpoint interpolation"
        );
        assert_eq!(
            mid.center, None,
            "fields absent from the target stay absent"
        );
    }
}
