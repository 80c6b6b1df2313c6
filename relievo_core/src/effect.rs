// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The effect compositor.
//!
//! [`Effect`] owns one element's style, bounds, and the derived layer stack.
//! Property setters compare-and-set, mark the matching dirty channel (see
//! [`dirty`](crate::dirty)), and flag the effect as needing display; the host
//! calls [`Effect::rebuild`] on its next draw opportunity.
//!
//! Rebuilds are wholesale: any geometry-affecting change discards and
//! reconstructs every derived spec. There are exactly two cheaper responses:
//!
//! - **Short-circuit** — the `(bounds, style)` snapshot matches what was
//!   last applied (bounds compared by size; style by structural equality),
//!   so the call is a no-op with no reallocation.
//! - **Fill recolor** — only the [`FILL`](crate::dirty::FILL) channel was
//!   marked (selection toggles), so just the fill layer's color is swapped.
//!
//! # Layer order
//!
//! Back-to-front, matching the two depth modes' compositing needs:
//!
//! - Convex: `[dark, light, fill, edge]` — the fill sits above the shadows
//!   and owns the corner clip; grouped rows add an outer mask that lets the
//!   shadow bleed across the seam but clips it at the group boundary.
//! - Concave: `[fill, dark, light, (light overflow), edge]` — the whole
//!   composite is clipped to the rounded bounds and the fill sits at the
//!   bottom so the inset shadow bands darken it.

use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;
use understory_dirty::{Channel, CycleHandling, DirtyTracker};

use crate::clip::ClipShape;
use crate::color::transformed;
use crate::dirty;
use crate::edge::{self, EdgeSpec};
use crate::shadow::{self, ShadowSide, ShadowSpec};
use crate::style::{CornerGroup, DepthType, EffectStyle, Tuning};
use crate::trace::{RebuildEvent, Tracer};

// Derived-layer slots, the keys of the dirty tracker.
const DARK_SLOT: u32 = 0;
const LIGHT_SLOT: u32 = 1;
const FILL_SLOT: u32 = 2;
const EDGE_SLOT: u32 = 3;

// HSB factors for the two derived tints.
const DARK_TINT: (f32, f32) = (0.1, 0.0);
const PRESSED_TINT: (f32, f32) = (1.0, 0.9);

/// The solid color layer behind (concave) or above (convex) the shadows.
#[derive(Clone, Debug, PartialEq)]
pub struct FillSpec {
    /// Layer frame in the element's local space.
    pub frame: Rect,
    /// Current fill color (selection tint while selected).
    pub color: Color,
    /// Corner clip the fill owns. Rounded in convex mode, plain bounds in
    /// concave mode (the composite clip rounds the corners there).
    pub clip: Option<ClipShape>,
}

/// The full derived layer stack for one element.
///
/// Draw back-to-front: dark shadow, light shadow, then in convex mode fill
/// above the shadows, in concave mode fill below them; edge highlight last.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStack {
    /// Depth mode the stack was built for (decides z-order and clipping).
    pub depth_type: DepthType,
    /// Lower-right darkening shadow.
    pub dark: ShadowSpec,
    /// Upper-left highlight shadow.
    pub light: ShadowSpec,
    /// Unmasked duplicate of the light shadow, concave mode only, so the
    /// highlight stays visible outside the gradient-masked region.
    pub light_overflow: Option<ShadowSpec>,
    /// Solid color layer.
    pub fill: FillSpec,
    /// Optional thin edge highlight.
    pub edge: EdgeSpec,
    /// Convex grouped rows only: mask rectangle the whole composite is
    /// clipped to, extended toward adjacent rows so the shadow can bleed
    /// into the seam.
    pub outer_mask: Option<Rect>,
    /// Concave only: rounded clip applied to the whole composite.
    pub composite_clip: Option<ClipShape>,
}

impl LayerStack {
    /// An invisible stack (degenerate bounds).
    #[must_use]
    pub fn hidden(depth_type: DepthType) -> Self {
        Self {
            depth_type,
            dark: ShadowSpec::hidden(),
            light: ShadowSpec::hidden(),
            light_overflow: None,
            fill: FillSpec {
                frame: Rect::ZERO,
                color: Color::TRANSPARENT,
                clip: None,
            },
            edge: EdgeSpec::hidden(),
            outer_mask: None,
            composite_clip: None,
        }
    }
}

/// What one [`Effect::rebuild`] call did.
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectChanges {
    /// The full layer stack was reconstructed.
    pub rebuilt: bool,
    /// Only the fill layer's color was swapped.
    pub fill_recolored: bool,
    /// The depth type changed since the last rebuild. Hosts use this to
    /// adjust their own clipping (clip-to-bounds only while concave, so a
    /// convex shadow can escape the element's frame).
    pub depth_type_changed: Option<DepthType>,
}

/// One element's neumorphic effect state and derived layers.
///
/// Each visual element exclusively owns one `Effect`; there is no sharing
/// across elements. All operations run synchronously on the owner's thread
/// and never fail — invalid style values are clamped, degenerate bounds
/// yield a hidden stack.
#[derive(Debug)]
pub struct Effect {
    bounds: Size,
    style: EffectStyle,
    tuning: Tuning,
    selected: bool,
    selected_tint: Color,
    applied: Option<(Size, EffectStyle)>,
    stack: LayerStack,
    dirty: DirtyTracker<u32>,
    pending_depth_change: Option<DepthType>,
    needs_display: bool,
}

impl Default for Effect {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect {
    /// Creates an effect with the default style and zero bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tuning(Tuning::DEFAULT)
    }

    /// Creates an effect with a custom constant table.
    #[must_use]
    pub fn with_tuning(tuning: Tuning) -> Self {
        let style = EffectStyle::default();
        let dirty = DirtyTracker::with_cycle_handling(CycleHandling::Error);
        Self {
            bounds: Size::ZERO,
            selected_tint: transformed(style.base_color(), PRESSED_TINT.0, PRESSED_TINT.1),
            style,
            tuning,
            selected: false,
            applied: None,
            stack: LayerStack::hidden(style.depth_type),
            dirty,
            pending_depth_change: None,
            needs_display: true,
        }
    }

    // -- Getters --

    /// Current bounds size.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &EffectStyle {
        &self.style
    }

    /// Current depth type.
    #[must_use]
    pub fn depth_type(&self) -> DepthType {
        self.style.depth_type
    }

    /// Current selection state.
    #[must_use]
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// The derived layer stack last produced by [`rebuild`](Self::rebuild).
    #[must_use]
    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }

    /// Whether a mutation since the last rebuild wants a redraw.
    ///
    /// Hosts poll this to schedule a draw cycle; [`rebuild`](Self::rebuild)
    /// clears it.
    #[must_use]
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    // -- Style setters (compare-and-set, auto-mark dirty) --

    /// Sets the element's bounds size (position is irrelevant; all geometry
    /// is local).
    pub fn set_bounds(&mut self, bounds: Size) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.mark_all();
        }
    }

    /// Sets the light-side shadow opacity.
    pub fn set_light_opacity(&mut self, opacity: f32) {
        if self.style.light_opacity != opacity {
            self.style.light_opacity = opacity;
            self.dirty.mark(LIGHT_SLOT, dirty::SHADOW);
            self.needs_display = true;
        }
    }

    /// Sets the dark-side shadow opacity.
    pub fn set_dark_opacity(&mut self, opacity: f32) {
        if self.style.dark_opacity != opacity {
            self.style.dark_opacity = opacity;
            self.dirty.mark(DARK_SLOT, dirty::SHADOW);
            self.needs_display = true;
        }
    }

    /// Sets the element fill color (`None` falls back to the background
    /// color).
    pub fn set_element_color(&mut self, color: Option<Color>) {
        if self.style.element_color != color {
            self.style.element_color = color;
            self.dirty.mark(FILL_SLOT, dirty::FILL);
            self.needs_display = true;
        }
    }

    /// Sets the background color the dark shadow tint derives from.
    pub fn set_background_color(&mut self, color: Color) {
        if self.style.background_color != color {
            self.style.background_color = color;
            self.dirty.mark(DARK_SLOT, dirty::SHADOW);
            self.dirty.mark(FILL_SLOT, dirty::FILL);
            self.needs_display = true;
        }
    }

    /// Switches between raised and pressed.
    ///
    /// The change is reported on the next rebuild as
    /// [`EffectChanges::depth_type_changed`].
    pub fn set_depth_type(&mut self, depth_type: DepthType) {
        if self.style.depth_type != depth_type {
            self.style.depth_type = depth_type;
            self.pending_depth_change = Some(depth_type);
            self.mark_all();
        }
    }

    /// Sets the corner configuration for grouped rows.
    pub fn set_corner_group(&mut self, corner_group: CornerGroup) {
        if self.style.corner_group != corner_group {
            self.style.corner_group = corner_group;
            self.mark_all();
        }
    }

    /// Sets the shadow spread magnitude.
    pub fn set_depth(&mut self, depth: f64) {
        if self.style.depth != depth {
            self.style.depth = depth;
            self.mark_all();
        }
    }

    /// Sets the corner radius.
    pub fn set_corner_radius(&mut self, corner_radius: f64) {
        if self.style.corner_radius != corner_radius {
            self.style.corner_radius = corner_radius;
            self.mark_all();
        }
    }

    /// Toggles the thin edge highlight.
    pub fn set_edged(&mut self, edged: bool) {
        if self.style.edged != edged {
            self.style.edged = edged;
            self.dirty.mark(EDGE_SLOT, dirty::EDGE);
            self.needs_display = true;
        }
    }

    /// Sets the selection state, recoloring the fill immediately.
    ///
    /// This is the interaction fast path: no geometry rebuild, safe to call
    /// every frame. Selection is not part of the dirty snapshot, but a
    /// change still raises [`needs_display`](Self::needs_display) so polling
    /// hosts present the recolor.
    pub fn set_selected(&mut self, selected: bool) {
        self.set_selected_with(selected, &mut Tracer::disabled());
    }

    /// [`set_selected`](Self::set_selected) with tracing.
    pub fn set_selected_with(&mut self, selected: bool, tracer: &mut Tracer<'_>) {
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        self.selected_tint =
            transformed(self.style.base_color(), PRESSED_TINT.0, PRESSED_TINT.1);
        self.stack.fill.color = self.current_fill_color();
        self.dirty.mark(FILL_SLOT, dirty::FILL);
        self.needs_display = true;
        tracer.selection(selected);
    }

    // -- Rebuild --

    /// Rebuilds the derived layer stack if anything changed.
    ///
    /// Idempotent: with an unchanged snapshot and no dirty marks this is a
    /// cheap no-op that does not reallocate.
    pub fn rebuild(&mut self) -> EffectChanges {
        self.rebuild_with(&mut Tracer::disabled())
    }

    /// [`rebuild`](Self::rebuild) with tracing.
    pub fn rebuild_with(&mut self, tracer: &mut Tracer<'_>) -> EffectChanges {
        let style = self.style.sanitized();
        let snapshot = (self.bounds, style);

        // Drain every channel up front so marks never accumulate. The
        // snapshot decides whether geometry work is needed; only the FILL
        // channel carries extra information (a recolor with an unchanged
        // snapshot).
        let _ = self.drain(dirty::GEOMETRY);
        let _ = self.drain(dirty::SHADOW);
        let _ = self.drain(dirty::EDGE);
        let fill_dirty = self.drain(dirty::FILL);

        if self.applied.as_ref() == Some(&snapshot) {
            self.needs_display = false;
            if fill_dirty {
                self.stack.fill.color = self.current_fill_color();
                tracer.fill_recolored();
                return EffectChanges {
                    fill_recolored: true,
                    ..EffectChanges::default()
                };
            }
            tracer.skip();
            return EffectChanges::default();
        }

        self.selected_tint = transformed(style.base_color(), PRESSED_TINT.0, PRESSED_TINT.1);
        self.stack = self.build_stack(&style);
        self.applied = Some(snapshot);
        self.needs_display = false;

        let depth_type_changed = self.pending_depth_change.take();
        if let Some(depth_type) = depth_type_changed {
            tracer.depth_changed(depth_type);
        }
        tracer.rebuild(&RebuildEvent {
            depth_type: style.depth_type,
            corner_group: style.corner_group,
            edged: style.edged,
        });
        EffectChanges {
            rebuilt: true,
            fill_recolored: false,
            depth_type_changed,
        }
    }

    // -- Internal helpers --

    fn current_fill_color(&self) -> Color {
        if self.selected {
            self.selected_tint
        } else {
            self.style.base_color()
        }
    }

    fn mark_all(&mut self) {
        self.dirty.mark(DARK_SLOT, dirty::GEOMETRY);
        self.dirty.mark(LIGHT_SLOT, dirty::GEOMETRY);
        self.dirty.mark(FILL_SLOT, dirty::GEOMETRY);
        self.dirty.mark(EDGE_SLOT, dirty::GEOMETRY);
        self.needs_display = true;
    }

    fn drain(&mut self, channel: Channel) -> bool {
        self.dirty.drain(channel).deterministic().run().count() > 0
    }

    fn build_stack(&self, style: &EffectStyle) -> LayerStack {
        if self.bounds.width <= 0.0 || self.bounds.height <= 0.0 {
            return LayerStack::hidden(style.depth_type);
        }

        let base_rect = Rect::from_origin_size(Point::ZERO, self.bounds);
        let corners = style.corner_group.active_corners();
        let dark_color = transformed(style.background_color, DARK_TINT.0, DARK_TINT.1);

        let dark = shadow::build(self.bounds, ShadowSide::Dark, style, &self.tuning, dark_color);
        let light = shadow::build(
            self.bounds,
            ShadowSide::Light,
            style,
            &self.tuning,
            Color::WHITE,
        );
        let light_overflow = (style.depth_type == DepthType::Concave).then(|| ShadowSpec {
            mask: None,
            ..light.clone()
        });

        let fill_clip = match style.depth_type {
            DepthType::Convex => Some(ClipShape::RoundedRect(RoundedRect::from_rect(
                base_rect,
                corners.radii(style.corner_radius),
            ))),
            DepthType::Concave => Some(ClipShape::Rect(base_rect)),
        };
        let fill = FillSpec {
            frame: base_rect,
            color: self.current_fill_color(),
            clip: fill_clip,
        };

        let edge = if style.edged {
            edge::build(self.bounds, style, &self.tuning, Color::WHITE)
        } else {
            EdgeSpec::hidden()
        };

        let outer_mask = (style.depth_type == DepthType::Convex)
            .then(|| self.outer_mask_rect(style))
            .flatten();
        let composite_clip = (style.depth_type == DepthType::Concave).then(|| {
            ClipShape::RoundedRect(RoundedRect::from_rect(
                base_rect,
                corners.radii(style.corner_radius),
            ))
        });

        LayerStack {
            depth_type: style.depth_type,
            dark,
            light,
            light_overflow,
            fill,
            edge,
            outer_mask,
            composite_clip,
        }
    }

    /// The convex grouped-row outer mask: the element's footprint extended
    /// by `2 × depth` sideways and toward adjacent rows.
    fn outer_mask_rect(&self, style: &EffectStyle) -> Option<Rect> {
        let e = style.depth * self.tuning.outer_mask_scale;
        let (w, h) = (self.bounds.width, self.bounds.height);
        match style.corner_group {
            CornerGroup::All => None,
            CornerGroup::TopRow => Some(Rect::new(-e, -e, w + e, h)),
            CornerGroup::MiddleRow => Some(Rect::new(-e, 0.0, w + e, h)),
            CornerGroup::BottomRow => Some(Rect::new(-e, 0.0, w + e, h + e)),
        }
    }
}
