// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invalidation extents for draw plans.

use kurbo::{Rect, Shape};

use relievo_core::clip::ClipShape;

use crate::plan::DrawPlan;

/// The region a plan can paint, in the element's local space.
///
/// Convex shadows draw outside the element's frame, so hosts must invalidate
/// this rect rather than the frame when the effect changes. For shadow items
/// the path's bounding box is shifted by the shadow offset and inflated by
/// the blur radius; a per-item clip bounds the result, and the composite
/// clip bounds the whole plan.
#[must_use]
pub fn visual_extent(plan: &DrawPlan) -> Rect {
    let mut extent: Option<Rect> = None;
    for item in &plan.items {
        let mut painted = match &item.shadow {
            Some(shadow) => item.frame.union(
                shadow
                    .path
                    .bounding_box()
                    .inflate(shadow.blur_radius, shadow.blur_radius)
                    + shadow.offset,
            ),
            None => item.frame,
        };
        if let Some(clip) = &item.clip {
            painted = painted.intersect(clip_bounds(clip));
        }
        extent = Some(match extent {
            Some(rect) => rect.union(painted),
            None => painted,
        });
    }
    let mut extent = extent.unwrap_or(Rect::ZERO);
    if let Some(clip) = &plan.composite_clip {
        extent = extent.intersect(clip_bounds(clip));
    }
    extent
}

fn clip_bounds(clip: &ClipShape) -> Rect {
    match clip {
        ClipShape::Rect(rect) => *rect,
        ClipShape::RoundedRect(rounded) => rounded.rect(),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use relievo_core::effect::Effect;
    use relievo_core::style::DepthType;

    use super::*;

    fn effect(depth_type: DepthType) -> Effect {
        let mut effect = Effect::new();
        effect.set_bounds(Size::new(100.0, 40.0));
        effect.set_corner_radius(12.0);
        effect.set_depth(5.0);
        effect.set_depth_type(depth_type);
        let _ = effect.rebuild();
        effect
    }

    #[test]
    fn convex_extent_escapes_the_frame() {
        let plan = DrawPlan::build(&effect(DepthType::Convex));
        let extent = visual_extent(&plan);
        // Path inset 2.5, blur 5, offset ±2.5: each side reaches 5 past the
        // frame.
        assert!((extent.x0 - -5.0).abs() < 1e-9);
        assert!((extent.y0 - -5.0).abs() < 1e-9);
        assert!((extent.x1 - 105.0).abs() < 1e-9);
        assert!((extent.y1 - 45.0).abs() < 1e-9);
    }

    #[test]
    fn concave_extent_stays_inside_the_bounds() {
        let plan = DrawPlan::build(&effect(DepthType::Concave));
        let extent = visual_extent(&plan);
        assert_eq!(extent, Rect::new(0.0, 0.0, 100.0, 40.0));
    }

    #[test]
    fn empty_plan_has_zero_extent() {
        let extent = visual_extent(&DrawPlan::default());
        assert_eq!(extent, Rect::ZERO);
    }
}
