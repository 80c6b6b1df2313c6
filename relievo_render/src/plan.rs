// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw plan: an ordered sequence of draw items for one effect.

use kurbo::{BezPath, Rect, Vec2};
use peniko::{Color, Fill};
use smallvec::SmallVec;

use relievo_core::clip::ClipShape;
use relievo_core::effect::{Effect, LayerStack};
use relievo_core::mask::MaskSpec;
use relievo_core::shadow::ShadowSpec;
use relievo_core::style::DepthType;

/// Which derived layer a draw item renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// Lower-right darkening shadow.
    DarkShadow,
    /// Upper-left highlight shadow.
    LightShadow,
    /// Unmasked duplicate of the light shadow (concave only).
    LightOverflow,
    /// Solid color layer.
    Fill,
    /// Thin edge highlight ring.
    Edge,
}

/// Shadow-casting parameters for a draw item, absent on plain fills.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowParams {
    /// The shadow-casting outline, in the same space as the item's frame.
    pub path: BezPath,
    /// Fill rule for `path`.
    pub fill_rule: Fill,
    /// Shadow offset vector.
    pub offset: Vec2,
    /// Gaussian blur radius.
    pub blur_radius: f64,
}

/// A single draw command.
///
/// Items are produced in back-to-front order for the effect's depth mode.
#[derive(Clone, Debug)]
pub struct DrawItem {
    /// The derived layer this item renders.
    pub role: LayerRole,
    /// Layer frame in the element's local space.
    pub frame: Rect,
    /// Layer color.
    pub color: Color,
    /// Opacity multiplier, `[0, 1]`.
    pub opacity: f32,
    /// Shadow parameters, present on shadow and edge items.
    pub shadow: Option<ShadowParams>,
    /// Alpha mask, present on masked concave shadow items.
    pub mask: Option<MaskSpec>,
    /// Per-item clip, present where the layer must not draw outside it.
    pub clip: Option<ClipShape>,
}

/// An ordered list of draw commands for one effect.
///
/// Hosts translate this into native layer mutations or GPU draw calls
/// depending on their rendering strategy.
#[derive(Clone, Debug, Default)]
pub struct DrawPlan {
    /// Clip applied around the whole plan, if any. A rectangle for convex
    /// grouped rows, a rounded rectangle for concave effects.
    pub composite_clip: Option<ClipShape>,
    /// Draw items in back-to-front order.
    pub items: SmallVec<[DrawItem; 5]>,
}

impl DrawPlan {
    /// Flattens an effect's current layer stack into a plan.
    ///
    /// Invisible layers (zero opacity, empty path) are dropped; a hidden
    /// stack yields an empty plan.
    #[must_use]
    pub fn build(effect: &Effect) -> Self {
        let stack = effect.stack();
        let mut plan = Self {
            composite_clip: composite_clip(stack),
            items: SmallVec::new(),
        };
        match stack.depth_type {
            DepthType::Convex => {
                plan.push_shadow(LayerRole::DarkShadow, &stack.dark);
                plan.push_shadow(LayerRole::LightShadow, &stack.light);
                plan.push_fill(stack);
            }
            DepthType::Concave => {
                plan.push_fill(stack);
                plan.push_shadow(LayerRole::DarkShadow, &stack.dark);
                plan.push_shadow(LayerRole::LightShadow, &stack.light);
                if let Some(overflow) = &stack.light_overflow {
                    plan.push_shadow(LayerRole::LightOverflow, overflow);
                }
            }
        }
        if stack.edge.visible {
            plan.items.push(DrawItem {
                role: LayerRole::Edge,
                frame: stack.edge.frame,
                color: stack.edge.color,
                opacity: stack.edge.opacity,
                shadow: Some(ShadowParams {
                    path: stack.edge.path.clone(),
                    fill_rule: stack.edge.fill_rule,
                    offset: stack.edge.offset,
                    blur_radius: 0.0,
                }),
                mask: None,
                clip: None,
            });
        }
        plan
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.composite_clip = None;
        self.items.clear();
    }

    fn push_shadow(&mut self, role: LayerRole, spec: &ShadowSpec) {
        if spec.opacity <= 0.0 || spec.path.elements().is_empty() {
            return;
        }
        self.items.push(DrawItem {
            role,
            frame: spec.frame,
            color: spec.color,
            opacity: spec.opacity,
            shadow: Some(ShadowParams {
                path: spec.path.clone(),
                fill_rule: spec.fill_rule,
                offset: spec.offset,
                blur_radius: spec.blur_radius,
            }),
            mask: spec.mask.clone(),
            clip: spec.clip_to_frame.then_some(ClipShape::Rect(spec.frame)),
        });
    }

    fn push_fill(&mut self, stack: &LayerStack) {
        if stack.fill.frame.is_zero_area() {
            return;
        }
        self.items.push(DrawItem {
            role: LayerRole::Fill,
            frame: stack.fill.frame,
            color: stack.fill.color,
            opacity: 1.0,
            shadow: None,
            mask: None,
            clip: stack.fill.clip,
        });
    }
}

fn composite_clip(stack: &LayerStack) -> Option<ClipShape> {
    match stack.depth_type {
        DepthType::Convex => stack.outer_mask.map(ClipShape::Rect),
        DepthType::Concave => stack.composite_clip,
    }
}

/// Implemented by hosts to carry a plan into their drawing system.
///
/// Both native-layer and GPU presenters implement this trait, enabling
/// generic update loops and test doubles.
///
/// # Update loop pseudocode
///
/// A typical host redraw wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_layout(size: Size) {
///     effect.set_bounds(size);
///     let changes = effect.rebuild();
///     if changes.rebuilt || changes.fill_recolored {
///         let plan = DrawPlan::build(&effect);
///         presenter.apply(&plan);
///         invalidate(visual_extent(&plan));
///     }
/// }
/// ```
pub trait Presenter {
    /// Applies the given plan to the backing drawing system.
    fn apply(&mut self, plan: &DrawPlan);
}
