// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shadow path derivation.
//!
//! The depth illusion comes from a pair of directional shadows cast by the
//! same element: a light one toward the upper-left (the implied light source)
//! and a dark one toward the lower-right. Each [`ShadowSpec`] is everything a
//! host needs to draw one of them: a path, a color, an offset vector, a blur
//! radius, an opacity, and (concave only) an alpha mask.
//!
//! There are four terminal computations — `{convex, concave} × {light,
//! dark}` — and no state: each is a pure function of the bounds and style.
//!
//! # Convex (raised)
//!
//! The path is a rounded rectangle inset from the bounds by half the depth,
//! with its corner radius shrunk by the same amount so the blurred result
//! lines up with the element's own curvature. Grouped rows extend the shadow
//! rectangle past the seam edge so the blur is not clipped where rows fuse.
//!
//! # Concave (pressed)
//!
//! The path is a ring: an outer rounded rectangle (radius grown by
//! [`Tuning::ring_gap`]) with an inner rounded rectangle (radius shrunk by
//! the gap) subtracted under even-odd fill. Shadowing the ring produces a
//! blurred band along the interior edge. The light-side band additionally
//! duplicates onto an unmasked overflow layer so the highlight survives
//! outside the gradient-masked region; the compositor owns that duplication.

use kurbo::{BezPath, Insets, Point, Rect, RoundedRect, RoundedRectRadii, Shape, Size, Vec2};
use peniko::{Color, Fill};

use crate::mask::{self, MaskSpec};
use crate::style::{CornerGroup, DepthType, EffectStyle, Tuning};

/// Curve flattening tolerance for corner arcs.
const PATH_TOLERANCE: f64 = 0.1;

/// Which of the paired directional shadows is being built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShadowSide {
    /// Upper-left highlight shadow.
    Light,
    /// Lower-right darkening shadow.
    Dark,
}

/// A drawable shadow layer descriptor.
///
/// Ephemeral: rebuilt wholesale on any style or bounds change, never patched.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowSpec {
    /// Layer frame in the element's local space.
    pub frame: Rect,
    /// The shadow-casting outline. Compound (outer + inner subpath) for
    /// concave rings.
    pub path: BezPath,
    /// Fill rule for `path`. [`Fill::EvenOdd`] when the path carries a hole.
    pub fill_rule: Fill,
    /// Shadow color.
    pub color: Color,
    /// Shadow offset vector.
    pub offset: Vec2,
    /// Gaussian blur radius.
    pub blur_radius: f64,
    /// Final opacity multiplier, `[0, 1]`.
    pub opacity: f32,
    /// Whether the host must clip this layer to `frame` (concave mode).
    pub clip_to_frame: bool,
    /// Alpha mask, present only for concave non-middle-row shadows.
    pub mask: Option<MaskSpec>,
}

impl ShadowSpec {
    /// An invisible spec: empty path, zero frame, zero opacity.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            frame: Rect::ZERO,
            path: BezPath::new(),
            fill_rule: Fill::NonZero,
            color: Color::TRANSPARENT,
            offset: Vec2::ZERO,
            blur_radius: 0.0,
            opacity: 0.0,
            clip_to_frame: false,
            mask: None,
        }
    }
}

/// Builds one side's shadow for the current depth mode.
///
/// `bounds` is the element's size in local space; `color` is the already
/// derived tint for this side. The style must be sanitized.
#[must_use]
pub fn build(
    bounds: Size,
    side: ShadowSide,
    style: &EffectStyle,
    tuning: &Tuning,
    color: Color,
) -> ShadowSpec {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return ShadowSpec::hidden();
    }
    match style.depth_type {
        DepthType::Convex => outer(bounds, side, style, tuning, color),
        DepthType::Concave => inner(bounds, side, style, tuning, color),
    }
}

/// Appends `subpath`'s elements to `path` as a new subpath.
fn append(path: &mut BezPath, subpath: BezPath) {
    for el in subpath.elements() {
        path.push(*el);
    }
}

/// Rounded rectangle outline, degrading to a plain rectangle when no corner
/// actually curves (zero-radius arcs would leave degenerate curve segments
/// in the path).
fn rounded_path(rect: Rect, radii: RoundedRectRadii) -> BezPath {
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

/// Convex mode: a single rounded rectangle casting an outer shadow.
fn outer(
    bounds: Size,
    side: ShadowSide,
    style: &EffectStyle,
    tuning: &Tuning,
    color: Color,
) -> ShadowSpec {
    let corners = style.corner_group.active_corners();
    // MiddleRow flattens the radius even if the style carries one.
    let shadow_corner_radius = if style.corner_group == CornerGroup::MiddleRow {
        0.0
    } else {
        style.corner_radius
    };

    let blur_radius = style.depth * tuning.convex_blur_scale;
    let offset_width = style.depth * tuning.convex_offset_scale;
    let effective_radius = if style.corner_radius <= 0.0 {
        0.0
    } else {
        (shadow_corner_radius - offset_width).max(0.0)
    };

    let mut offset = match side {
        ShadowSide::Light => Vec2::new(-offset_width, -offset_width),
        ShadowSide::Dark => Vec2::new(offset_width, offset_width),
    };

    // Extend the shadow rect past row seams so the blur is not cut where
    // adjacent rows are meant to fuse.
    let extend = style.corner_radius.max(shadow_corner_radius);
    let base = Rect::from_origin_size(Point::ZERO, bounds);
    let shadow_rect = match style.corner_group {
        CornerGroup::All => base,
        CornerGroup::TopRow => Rect::new(base.x0, base.y0, base.x1, base.y1 + extend),
        CornerGroup::MiddleRow => {
            offset.y = 0.0;
            Rect::new(base.x0, base.y0 - extend, base.x1, base.y1 + extend)
        }
        CornerGroup::BottomRow => Rect::new(base.x0, base.y0 - extend, base.x1, base.y1),
    };

    let path_rect = shadow_rect.inset(-offset_width);
    ShadowSpec {
        frame: base,
        path: rounded_path(path_rect, corners.radii(effective_radius)),
        fill_rule: Fill::NonZero,
        color,
        offset,
        blur_radius,
        opacity: side_opacity(side, style),
        clip_to_frame: false,
        mask: None,
    }
}

/// Concave mode: a rounded ring casting an inset shadow.
fn inner(
    bounds: Size,
    side: ShadowSide,
    style: &EffectStyle,
    tuning: &Tuning,
    color: Color,
) -> ShadowSpec {
    let corners = style.corner_group.active_corners();
    let blur_radius = style.depth * tuning.concave_blur_scale;
    let gap = tuning.ring_gap;

    let mut offset = Vec2::ZERO;
    let mut shadow_size = bounds;
    match style.corner_group {
        CornerGroup::All => {}
        CornerGroup::TopRow => {
            shadow_size.height += blur_radius * 4.0;
        }
        CornerGroup::MiddleRow => {
            // Widen sideways as well so neither band clips at the row's
            // vertical edges.
            shadow_size.height += blur_radius * 6.0;
            if side == ShadowSide::Light {
                shadow_size.width += blur_radius * 3.0;
                offset = Vec2::new(-blur_radius * 3.0, -blur_radius * 3.0);
            } else {
                shadow_size.width += blur_radius * 2.0;
                offset = Vec2::new(0.0, -blur_radius * 3.0);
            }
        }
        CornerGroup::BottomRow => {
            shadow_size.height += blur_radius * 4.0;
            offset = Vec2::new(0.0, -blur_radius * 4.0);
        }
    }

    let shadow_rect = Rect::from_origin_size(Point::ZERO, shadow_size);
    let outer_rect = shadow_rect.inset(Insets::uniform(gap));
    let inner_rect = shadow_rect.inset(Insets::uniform(-gap));

    // The ring: outer outline plus inner outline, resolved as a hole by
    // even-odd fill. MiddleRow has no active corners, so both outlines stay
    // square.
    let inner_radius = (style.corner_radius - gap).max(0.0);
    let mut path = rounded_path(outer_rect, corners.radii(style.corner_radius + gap));
    append(&mut path, rounded_path(inner_rect, corners.radii(inner_radius)));

    ShadowSpec {
        frame: Rect::from_origin_size(Point::ZERO, bounds),
        path,
        fill_rule: Fill::EvenOdd,
        color,
        offset,
        blur_radius,
        opacity: side_opacity(side, style),
        clip_to_frame: true,
        mask: mask::corner_mask(bounds, style.corner_group, side, style.corner_radius),
    }
}

fn side_opacity(side: ShadowSide, style: &EffectStyle) -> f32 {
    match side {
        ShadowSide::Light => style.light_opacity,
        ShadowSide::Dark => style.dark_opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size::new(100.0, 40.0);

    fn convex_style() -> EffectStyle {
        EffectStyle {
            depth_type: DepthType::Convex,
            corner_radius: 12.0,
            depth: 5.0,
            ..EffectStyle::default()
        }
    }

    fn concave_style() -> EffectStyle {
        EffectStyle {
            depth_type: DepthType::Concave,
            corner_radius: 12.0,
            depth: 8.0,
            ..EffectStyle::default()
        }
    }

    #[test]
    fn convex_offsets_are_half_depth_and_mirrored() {
        let style = convex_style();
        let light = build(BOUNDS, ShadowSide::Light, &style, &Tuning::DEFAULT, Color::WHITE);
        let dark = build(BOUNDS, ShadowSide::Dark, &style, &Tuning::DEFAULT, Color::BLACK);
        assert_eq!(light.offset, Vec2::new(-2.5, -2.5));
        assert_eq!(dark.offset, Vec2::new(2.5, 2.5));
    }

    #[test]
    fn convex_path_is_inset_rounded_rect() {
        let style = convex_style();
        let spec = build(BOUNDS, ShadowSide::Dark, &style, &Tuning::DEFAULT, Color::BLACK);
        // Inset by offset (2.5) on all sides; radius shrunk to 9.5.
        let bbox = spec.path.bounding_box();
        assert!((bbox.x0 - 2.5).abs() < 1e-9);
        assert!((bbox.y0 - 2.5).abs() < 1e-9);
        assert!((bbox.x1 - 97.5).abs() < 1e-9);
        assert!((bbox.y1 - 37.5).abs() < 1e-9);
        assert_eq!(spec.fill_rule, Fill::NonZero);
        assert_eq!(spec.blur_radius, 5.0);
        assert!(!spec.clip_to_frame);
        assert!(spec.mask.is_none());
    }

    #[test]
    fn convex_radius_never_goes_negative() {
        let style = EffectStyle {
            corner_radius: 1.0,
            depth: 10.0,
            ..convex_style()
        };
        let spec = build(BOUNDS, ShadowSide::Dark, &style, &Tuning::DEFAULT, Color::BLACK);
        // Offset 5 exceeds radius 1; the path must still be well-formed.
        assert!(!spec.path.elements().is_empty());
    }

    #[test]
    fn convex_middle_row_zeroes_vertical_offset() {
        let style = EffectStyle {
            corner_group: CornerGroup::MiddleRow,
            ..convex_style()
        };
        let light = build(BOUNDS, ShadowSide::Light, &style, &Tuning::DEFAULT, Color::WHITE);
        assert_eq!(light.offset, Vec2::new(-2.5, 0.0));
    }

    #[test]
    fn convex_row_shadow_extends_past_seam() {
        let style = EffectStyle {
            corner_group: CornerGroup::TopRow,
            ..convex_style()
        };
        let spec = build(BOUNDS, ShadowSide::Dark, &style, &Tuning::DEFAULT, Color::BLACK);
        // Extended down by max(12, 12) = 12, then inset by 2.5.
        let bbox = spec.path.bounding_box();
        assert!((bbox.y1 - 49.5).abs() < 1e-9);
    }

    #[test]
    fn concave_blur_scales_by_three_quarters() {
        let style = concave_style();
        let spec = build(BOUNDS, ShadowSide::Dark, &style, &Tuning::DEFAULT, Color::BLACK);
        assert_eq!(spec.blur_radius, 6.0);
    }

    #[test]
    fn concave_ring_uses_even_odd_fill() {
        let style = concave_style();
        let spec = build(BOUNDS, ShadowSide::Light, &style, &Tuning::DEFAULT, Color::WHITE);
        assert_eq!(spec.fill_rule, Fill::EvenOdd);
        assert!(spec.clip_to_frame);
        // Two subpaths: two MoveTo elements.
        let moves = spec
            .path
            .elements()
            .iter()
            .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 2);
    }

    #[test]
    fn concave_all_group_carries_masks() {
        let style = concave_style();
        let light = build(BOUNDS, ShadowSide::Light, &style, &Tuning::DEFAULT, Color::WHITE);
        let dark = build(BOUNDS, ShadowSide::Dark, &style, &Tuning::DEFAULT, Color::BLACK);
        assert!(light.mask.is_some());
        assert!(dark.mask.is_some());
    }

    #[test]
    fn concave_middle_row_has_no_mask_and_no_rounding() {
        let style = EffectStyle {
            corner_group: CornerGroup::MiddleRow,
            ..concave_style()
        };
        let spec = build(BOUNDS, ShadowSide::Light, &style, &Tuning::DEFAULT, Color::WHITE);
        assert!(spec.mask.is_none());
        // Plain rects: only lines, no curves.
        assert!(
            spec.path
                .elements()
                .iter()
                .all(|el| !matches!(el, kurbo::PathEl::CurveTo(..))),
            "middle row paths must stay square"
        );
    }

    #[test]
    fn concave_bottom_row_shifts_shadow_up() {
        let style = EffectStyle {
            corner_group: CornerGroup::BottomRow,
            ..concave_style()
        };
        let spec = build(BOUNDS, ShadowSide::Dark, &style, &Tuning::DEFAULT, Color::BLACK);
        // blur = 6; offset y = -4 × blur.
        assert_eq!(spec.offset, Vec2::new(0.0, -24.0));
    }

    #[test]
    fn concave_middle_row_light_widens_both_axes() {
        let style = EffectStyle {
            corner_group: CornerGroup::MiddleRow,
            ..concave_style()
        };
        let spec = build(BOUNDS, ShadowSide::Light, &style, &Tuning::DEFAULT, Color::WHITE);
        assert_eq!(spec.offset, Vec2::new(-18.0, -18.0));
        let bbox = spec.path.bounding_box();
        // width + 3×blur, height + 6×blur, grown by the ring gap.
        assert!((bbox.width() - (100.0 + 18.0 + 2.0)).abs() < 1e-9);
        assert!((bbox.height() - (40.0 + 36.0 + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn degenerate_bounds_produce_hidden_spec() {
        let style = convex_style();
        let spec = build(
            Size::new(0.0, 40.0),
            ShadowSide::Light,
            &style,
            &Tuning::DEFAULT,
            Color::WHITE,
        );
        assert_eq!(spec.opacity, 0.0);
        assert!(spec.path.elements().is_empty());
    }

    #[test]
    fn opacity_comes_straight_from_style() {
        let style = EffectStyle {
            light_opacity: 0.8,
            dark_opacity: 0.25,
            ..concave_style()
        };
        let light = build(BOUNDS, ShadowSide::Light, &style, &Tuning::DEFAULT, Color::WHITE);
        let dark = build(BOUNDS, ShadowSide::Dark, &style, &Tuning::DEFAULT, Color::BLACK);
        assert_eq!(light.opacity, 0.8);
        assert_eq!(dark.opacity, 0.25);
    }
}
