// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge highlight ring.
//!
//! An optional sub-pixel ring drawn at the element's boundary: the same
//! outer-minus-inner construction as the concave shadow ring, but with no
//! blur and a fixed near-white color. Grouped rows extend the ring's bounds
//! past the seam edge so the highlight reads as continuous across fused
//! rows.
//!
//! When the style's `edged` flag is off the compositor applies
//! [`EdgeSpec::hidden`], which fully erases any previously applied highlight
//! (zero opacity, empty path, zero-size frame).

use kurbo::{BezPath, Insets, Point, Rect, RoundedRect, RoundedRectRadii, Shape, Size, Vec2};
use peniko::{Color, Fill};

use crate::style::{CornerGroup, DepthType, EffectStyle, Tuning};

const PATH_TOLERANCE: f64 = 0.1;

/// Rounded rectangle outline, degrading to a plain rectangle when no corner
/// actually curves.
fn ring_path(rect: Rect, radii: RoundedRectRadii) -> BezPath {
    if radii.top_left <= 0.0
        && radii.top_right <= 0.0
        && radii.bottom_right <= 0.0
        && radii.bottom_left <= 0.0
    {
        rect.to_path(PATH_TOLERANCE)
    } else {
        RoundedRect::from_rect(rect, radii).to_path(PATH_TOLERANCE)
    }
}

/// A drawable edge highlight descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSpec {
    /// Layer frame in the element's local space.
    pub frame: Rect,
    /// Ring outline (outer subpath plus inner hole).
    pub path: BezPath,
    /// Fill rule; the ring needs [`Fill::EvenOdd`].
    pub fill_rule: Fill,
    /// Highlight color.
    pub color: Color,
    /// Draw offset (used by concave rows to shift the ring off the seam).
    pub offset: Vec2,
    /// Final opacity, `min(light_opacity × 1.5, 1)`.
    pub opacity: f32,
    /// Whether the highlight is drawn at all.
    pub visible: bool,
}

impl EdgeSpec {
    /// The erased state: empty path, zero frame, zero opacity.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            frame: Rect::ZERO,
            path: BezPath::new(),
            fill_rule: Fill::NonZero,
            color: Color::TRANSPARENT,
            offset: Vec2::ZERO,
            opacity: 0.0,
            visible: false,
        }
    }
}

/// Builds the edge highlight for the current style.
///
/// Callers gate on the style's `edged` flag; this function always builds a
/// visible ring (for degenerate bounds it returns the hidden spec).
#[must_use]
pub fn build(bounds: Size, style: &EffectStyle, tuning: &Tuning, color: Color) -> EdgeSpec {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return EdgeSpec::hidden();
    }

    let corners = style.corner_group.active_corners();
    let width = tuning.edge_width;
    let base = Rect::from_origin_size(Point::ZERO, bounds);

    // Row groups extend the ring across the seam; concave rows additionally
    // shift it so the open edge lands outside the clip.
    let mut offset_y = 0.0;
    let edge_bounds = match (style.depth_type, style.corner_group) {
        (_, CornerGroup::All) => base,
        (DepthType::Convex, CornerGroup::TopRow) => {
            Rect::new(base.x0, base.y0, base.x1, base.y1 + 2.0)
        }
        (DepthType::Convex, CornerGroup::MiddleRow) => {
            Rect::new(base.x0, base.y0 - 2.0, base.x1, base.y1 + 2.0)
        }
        (DepthType::Convex, CornerGroup::BottomRow) => {
            Rect::new(base.x0, base.y0 - 2.0, base.x1, base.y1)
        }
        (DepthType::Concave, CornerGroup::TopRow) => {
            Rect::new(base.x0, base.y0, base.x1, base.y1 + 2.0)
        }
        (DepthType::Concave, CornerGroup::MiddleRow) => {
            offset_y = -5.0;
            Rect::new(base.x0, base.y0, base.x1, base.y1 + 10.0)
        }
        (DepthType::Concave, CornerGroup::BottomRow) => {
            offset_y = -2.0;
            Rect::new(base.x0, base.y0, base.x1, base.y1 + 2.0)
        }
    };

    let outer_radius = style.corner_radius;
    let inner_radius = (style.corner_radius - width).max(0.0);
    let inner_rect = edge_bounds.inset(Insets::uniform(-width));

    let mut path = ring_path(edge_bounds, corners.radii(outer_radius));
    for el in ring_path(inner_rect, corners.radii(inner_radius)).elements() {
        path.push(*el);
    }

    EdgeSpec {
        frame: base,
        path,
        fill_rule: Fill::EvenOdd,
        color,
        offset: Vec2::new(0.0, offset_y),
        opacity: (style.light_opacity * 1.5).min(1.0),
        visible: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size::new(100.0, 40.0);

    fn edged_style(depth_type: DepthType, corner_group: CornerGroup) -> EffectStyle {
        EffectStyle {
            depth_type,
            corner_group,
            corner_radius: 12.0,
            edged: true,
            ..EffectStyle::default()
        }
    }

    #[test]
    fn hidden_spec_is_fully_erased() {
        let spec = EdgeSpec::hidden();
        assert_eq!(spec.opacity, 0.0);
        assert!(spec.path.elements().is_empty());
        assert_eq!(spec.frame, Rect::ZERO);
        assert!(!spec.visible);
    }

    #[test]
    fn ring_has_two_subpaths() {
        let style = edged_style(DepthType::Convex, CornerGroup::All);
        let spec = build(BOUNDS, &style, &Tuning::DEFAULT, Color::WHITE);
        let moves = spec
            .path
            .elements()
            .iter()
            .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 2);
        assert_eq!(spec.fill_rule, Fill::EvenOdd);
        assert!(spec.visible);
    }

    #[test]
    fn opacity_is_boosted_light_opacity_capped_at_one() {
        let mut style = edged_style(DepthType::Convex, CornerGroup::All);
        style.light_opacity = 0.4;
        let spec = build(BOUNDS, &style, &Tuning::DEFAULT, Color::WHITE);
        assert!((spec.opacity - 0.6).abs() < 1e-6);

        style.light_opacity = 0.9;
        let spec = build(BOUNDS, &style, &Tuning::DEFAULT, Color::WHITE);
        assert_eq!(spec.opacity, 1.0);
    }

    #[test]
    fn convex_rows_extend_across_seams() {
        let style = edged_style(DepthType::Convex, CornerGroup::MiddleRow);
        let spec = build(BOUNDS, &style, &Tuning::DEFAULT, Color::WHITE);
        let bbox = spec.path.bounding_box();
        assert!((bbox.y0 + 2.0).abs() < 1e-9);
        assert!((bbox.y1 - 42.0).abs() < 1e-9);
        assert_eq!(spec.offset, Vec2::ZERO);
    }

    #[test]
    fn concave_rows_shift_the_ring_off_the_seam() {
        let style = edged_style(DepthType::Concave, CornerGroup::MiddleRow);
        let spec = build(BOUNDS, &style, &Tuning::DEFAULT, Color::WHITE);
        assert_eq!(spec.offset, Vec2::new(0.0, -5.0));

        let style = edged_style(DepthType::Concave, CornerGroup::BottomRow);
        let spec = build(BOUNDS, &style, &Tuning::DEFAULT, Color::WHITE);
        assert_eq!(spec.offset, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn middle_row_ring_stays_square() {
        let style = edged_style(DepthType::Concave, CornerGroup::MiddleRow);
        let spec = build(BOUNDS, &style, &Tuning::DEFAULT, Color::WHITE);
        assert!(
            spec.path
                .elements()
                .iter()
                .all(|el| !matches!(el, kurbo::PathEl::CurveTo(..))),
            "middle row must not round corners"
        );
    }

    #[test]
    fn degenerate_bounds_are_hidden() {
        let style = edged_style(DepthType::Convex, CornerGroup::All);
        let spec = build(Size::new(100.0, 0.0), &style, &Tuning::DEFAULT, Color::WHITE);
        assert!(!spec.visible);
    }
}
