// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect style model.
//!
//! [`EffectStyle`] is the full set of inputs to the geometry engine apart
//! from the element's bounds. It is a plain value type: the compositor copies
//! it into a snapshot on every rebuild and compares snapshots field-by-field
//! (structural equality, including colors by value) to decide whether any
//! geometry work is needed.
//!
//! Bad style values never fail. [`EffectStyle::sanitized`] clamps opacities
//! to `[0, 1]` and radius/depth to non-negative before any builder sees them.
//!
//! [`Tuning`] is the single table of per-mode scaling constants the builders
//! share. The source material carried two near-duplicate engines that
//! differed only in these constants; one consistent set is kept here.

use peniko::Color;

/// Whether the element reads as raised or pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DepthType {
    /// Raised: paired outer shadows outside the silhouette.
    #[default]
    Convex,
    /// Pressed: ring-shaped inner shadows inside the silhouette.
    Concave,
}

/// Which corners of the panel are rounded, for grouped-row layouts.
///
/// `All` suits standalone panels and buttons; the row variants fuse adjacent
/// list rows into one visually rounded block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CornerGroup {
    /// All four corners rounded.
    #[default]
    All,
    /// Top row of a group: top corners only.
    TopRow,
    /// Interior row of a group: no rounding at all.
    MiddleRow,
    /// Bottom row of a group: bottom corners only.
    BottomRow,
}

/// Immutable per-rebuild style inputs.
///
/// Two styles are equal iff every field compares equal; the compositor uses
/// this for its dirty-snapshot check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectStyle {
    /// Opacity of the light-side shadow, `[0, 1]`.
    pub light_opacity: f32,
    /// Opacity of the dark-side shadow, `[0, 1]`.
    pub dark_opacity: f32,
    /// Fill color of the element. `None` falls back to `background_color`.
    pub element_color: Option<Color>,
    /// Base color used to derive the dark shadow tint (and the fill when
    /// `element_color` is `None`).
    pub background_color: Color,
    /// Raised or pressed.
    pub depth_type: DepthType,
    /// Corner participation for grouped rows.
    pub corner_group: CornerGroup,
    /// Shadow spread magnitude, `>= 0`.
    pub depth: f64,
    /// Whether to draw the thin edge highlight ring.
    pub edged: bool,
    /// Corner radius, `>= 0`. Ignored (treated as 0) for
    /// [`CornerGroup::MiddleRow`].
    pub corner_radius: f64,
}

impl Default for EffectStyle {
    fn default() -> Self {
        Self {
            light_opacity: 1.0,
            dark_opacity: 0.3,
            element_color: None,
            background_color: Color::WHITE,
            depth_type: DepthType::Convex,
            corner_group: CornerGroup::All,
            depth: 5.0,
            edged: false,
            corner_radius: 0.0,
        }
    }
}

impl EffectStyle {
    /// Returns a copy with every field forced into its valid range.
    ///
    /// Opacities clamp to `[0, 1]`; depth and radius clamp to `>= 0`. NaN
    /// opacities become 0. This is the only sanitation step — builders assume
    /// their inputs are already in range.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let clamp_unit = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            light_opacity: clamp_unit(self.light_opacity),
            dark_opacity: clamp_unit(self.dark_opacity),
            depth: self.depth.max(0.0),
            corner_radius: self.corner_radius.max(0.0),
            ..self
        }
    }

    /// The color the fill layer uses: the element color, falling back to the
    /// background color.
    #[must_use]
    pub fn base_color(&self) -> Color {
        self.element_color.unwrap_or(self.background_color)
    }
}

/// Per-mode scaling constants shared by the path builders.
///
/// One engine, one constant set. Divergent constants from the source
/// material's duplicated engine variant are not preserved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// Convex shadow offset as a fraction of `depth` (offset = depth × this).
    pub convex_offset_scale: f64,
    /// Convex blur radius as a fraction of `depth`.
    pub convex_blur_scale: f64,
    /// Concave blur radius as a fraction of `depth`.
    pub concave_blur_scale: f64,
    /// Half-width of the concave ring path's seam-hiding inset.
    pub ring_gap: f64,
    /// Stroke width of the edge highlight ring.
    pub edge_width: f64,
    /// Convex outer-mask extension as a multiple of `depth`.
    pub outer_mask_scale: f64,
}

impl Tuning {
    /// The default constant set.
    pub const DEFAULT: Self = Self {
        convex_offset_scale: 0.5,
        convex_blur_scale: 1.0,
        concave_blur_scale: 0.75,
        ring_gap: 1.0,
        edge_width: 0.75,
        outer_mask_scale: 2.0,
    };
}

impl Default for Tuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_documented_defaults() {
        let style = EffectStyle::default();
        assert_eq!(style.light_opacity, 1.0);
        assert_eq!(style.dark_opacity, 0.3);
        assert_eq!(style.element_color, None);
        assert_eq!(style.background_color, Color::WHITE);
        assert_eq!(style.depth_type, DepthType::Convex);
        assert_eq!(style.corner_group, CornerGroup::All);
        assert_eq!(style.depth, 5.0);
        assert!(!style.edged);
        assert_eq!(style.corner_radius, 0.0);
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let style = EffectStyle {
            light_opacity: 2.5,
            dark_opacity: -1.0,
            depth: -3.0,
            corner_radius: -9.0,
            ..EffectStyle::default()
        };
        let s = style.sanitized();
        assert_eq!(s.light_opacity, 1.0);
        assert_eq!(s.dark_opacity, 0.0);
        assert_eq!(s.depth, 0.0);
        assert_eq!(s.corner_radius, 0.0);
    }

    #[test]
    fn sanitized_keeps_valid_values() {
        let style = EffectStyle {
            light_opacity: 0.7,
            dark_opacity: 0.2,
            depth: 8.0,
            corner_radius: 12.0,
            ..EffectStyle::default()
        };
        assert_eq!(style.sanitized(), style);
    }

    #[test]
    fn nan_opacity_becomes_zero() {
        let style = EffectStyle {
            light_opacity: f32::NAN,
            ..EffectStyle::default()
        };
        assert_eq!(style.sanitized().light_opacity, 0.0);
    }

    #[test]
    fn base_color_prefers_element_color() {
        let red = Color::new([1.0, 0.0, 0.0, 1.0]);
        let style = EffectStyle {
            element_color: Some(red),
            ..EffectStyle::default()
        };
        assert_eq!(style.base_color(), red);
        let style = EffectStyle {
            element_color: None,
            ..EffectStyle::default()
        };
        assert_eq!(style.base_color(), style.background_color);
    }

    #[test]
    fn structural_equality_over_all_fields() {
        let a = EffectStyle::default();
        let mut b = a;
        assert_eq!(a, b);
        b.corner_radius = 1.0;
        assert_ne!(a, b);
    }
}
