// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient alpha masks for concave corner hand-off.
//!
//! The two concave inner shadows are the same ring path drawn twice, once in
//! the light color and once in the dark. Without masking, both bands would
//! bleed through the corners the outer path has already rounded. The mask
//! limits each band to its own region and fades it across the two *receding*
//! corners — top-right and bottom-left, the corners the diagonal upper-left
//! light axis grazes — so the light and dark bands hand off smoothly there.
//!
//! A [`MaskSpec`] is an alpha-mask descriptor: an optional full-strength fill
//! rectangle plus up to two per-corner linear fades. Hosts rasterize black as
//! opaque and transparent as clear, then use the result as the shadow
//! layer's alpha mask. Fade direction reverses between the light and dark
//! sides. Masks apply only to concave mode, and never to
//! [`MiddleRow`](CornerGroup::MiddleRow) (no rounded corners, nothing to
//! protect).

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::shadow::ShadowSide;
use crate::style::CornerGroup;

/// One stop of a mask fade gradient.
///
/// Kept crate-local (rather than reusing a paint crate's stop type) so the
/// gradient endpoints can be kurbo points without coupling kurbo and peniko
/// versions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskStop {
    /// Position along the gradient, `[0, 1]`.
    pub offset: f32,
    /// Mask color at this stop (black = opaque mask, transparent = clear).
    pub color: Color,
}

/// A linear fade confined to one corner square.
#[derive(Clone, Debug, PartialEq)]
pub struct CornerFade {
    /// The radius×radius corner square the fade is clipped to.
    pub rect: Rect,
    /// Gradient start (full mask strength).
    pub start: Point,
    /// Gradient end (fully faded out).
    pub end: Point,
    /// Color stops, black to transparent.
    pub stops: [MaskStop; 2],
}

/// Alpha-mask descriptor for one concave shadow layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaskSpec {
    /// Region masked at full strength, if any.
    pub fill: Option<Rect>,
    /// Per-corner fades (at most two: top-right and bottom-left).
    pub fades: Vec<CornerFade>,
}

const STOPS: [MaskStop; 2] = [
    MaskStop {
        offset: 0.0,
        color: Color::BLACK,
    },
    MaskStop {
        offset: 1.0,
        color: Color::TRANSPARENT,
    },
];

/// Corner square at the top-right of a `size` frame.
fn top_right_rect(size: Size, radius: f64) -> Rect {
    Rect::new(size.width - radius, 0.0, size.width, radius)
}

/// Corner square at the bottom-left of a `size` frame.
fn bottom_left_rect(size: Size, radius: f64) -> Rect {
    Rect::new(0.0, size.height - radius, radius, size.height)
}

/// Fade across `rect` from its far (bottom-right) point to its origin.
fn fade_inward(rect: Rect) -> CornerFade {
    CornerFade {
        rect,
        start: Point::new(rect.x1, rect.y1),
        end: Point::new(rect.x0, rect.y0),
        stops: STOPS,
    }
}

/// Fade across `rect` from its origin to its far (bottom-right) point.
fn fade_outward(rect: Rect) -> CornerFade {
    CornerFade {
        rect,
        start: Point::new(rect.x0, rect.y0),
        end: Point::new(rect.x1, rect.y1),
        stops: STOPS,
    }
}

/// Builds the alpha mask for one concave shadow layer.
///
/// Returns `None` for [`CornerGroup::MiddleRow`]; every other group gets a
/// mask with fades at the receding corners its rounding touches. The
/// full-strength fill for [`CornerGroup::All`] is emitted only when the frame
/// exceeds twice the corner radius in both dimensions.
#[must_use]
pub fn corner_mask(
    size: Size,
    group: CornerGroup,
    side: ShadowSide,
    radius: f64,
) -> Option<MaskSpec> {
    let frame = Rect::from_origin_size(Point::ZERO, size);
    let (w, h) = (size.width, size.height);
    let r = radius;
    let tr = top_right_rect(size, r);
    let bl = bottom_left_rect(size, r);

    let spec = match (group, side) {
        (CornerGroup::MiddleRow, _) => return None,
        (CornerGroup::All, ShadowSide::Light) => MaskSpec {
            fill: (w > r * 2.0 && h > r * 2.0).then(|| Rect::new(r, r, w, h)),
            fades: [fade_inward(tr), fade_inward(bl)].into(),
        },
        (CornerGroup::All, ShadowSide::Dark) => MaskSpec {
            fill: (w > r * 2.0 && h > r * 2.0).then(|| Rect::new(0.0, 0.0, w - r, h - r)),
            fades: [fade_outward(tr), fade_outward(bl)].into(),
        },
        (CornerGroup::TopRow, ShadowSide::Light) => MaskSpec {
            fill: Some(Rect::new(w - r, r, w, h).intersect(frame)),
            fades: [fade_inward(tr)].into(),
        },
        (CornerGroup::TopRow, ShadowSide::Dark) => MaskSpec {
            fill: Some(Rect::new(0.0, 0.0, w - r, h)),
            fades: [fade_outward(tr)].into(),
        },
        (CornerGroup::BottomRow, ShadowSide::Light) => MaskSpec {
            fill: Some(Rect::new(r, 0.0, w, h).intersect(frame)),
            fades: [fade_inward(bl)].into(),
        },
        (CornerGroup::BottomRow, ShadowSide::Dark) => MaskSpec {
            fill: Some(Rect::new(0.0, 0.0, r, h - r)),
            fades: [fade_outward(bl)].into(),
        },
    };
    Some(spec)
}
